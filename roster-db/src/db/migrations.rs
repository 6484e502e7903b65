//! Schema migrations for the roster tables

use sqlx::migrate::Migrator;
use sqlx::PgPool;

use crate::Result;

/// Embedded migrations from `roster-db/migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Apply all pending migrations.
pub async fn run(pool: &PgPool) -> Result<()> {
    tracing::info!("Running roster migrations...");
    MIGRATOR.run(pool).await?;
    tracing::info!("Roster migrations complete");
    Ok(())
}
