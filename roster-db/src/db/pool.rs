//! Connection pool construction
//!
//! The fetches never open connections themselves; callers build a pool
//! here (or bring their own executor) and hand it in.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::debug;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long to wait for a connection, including retries while the server
/// refuses connections.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Create a PostgreSQL connection pool with the default connection limit.
///
/// # Errors
///
/// Returns an error if the URL is invalid or the first connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/roster").await?;
/// let users = roster_db::UserRepo::new(&pool).for_course(1).await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(
        database_url,
        DEFAULT_MAX_CONNECTIONS,
        DEFAULT_ACQUIRE_TIMEOUT,
    )
    .await
}

/// Create a PostgreSQL connection pool with explicit limits.
///
/// A `max_connections` of zero is raised to one.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<PgPool, sqlx::Error> {
    debug!(max_connections, ?acquire_timeout, "connecting to postgres");
    PgPoolOptions::new()
        .max_connections(max_connections.max(1))
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await
}
