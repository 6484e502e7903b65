//! Repository implementations for the roster tables
//!
//! Each fetch follows the same shape:
//! - one join query keyed by a single `i64`
//! - rows streamed from the cursor and decoded through `FromRow`
//! - the first failure is classified and returned, with no partial results

pub mod courses;
pub mod projects;
pub mod users;

pub use courses::{courses_for_user, CourseRepo};
pub use projects::{projects_for_user, ProjectRepo};
pub use users::{users_for_course, UserRepo};

use futures::TryStreamExt;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgExecutor};

use crate::DbError;

/// Run `sql` with `key` bound to `$1` and decode every row into `T`.
///
/// The row stream owns the cursor; it is dropped when this function returns,
/// whether that is after the last row or on the first error.
pub(crate) async fn fetch_keyed<'e, E, T>(
    executor: E,
    sql: &'static str,
    key: i64,
) -> Result<Vec<T>, DbError>
where
    E: PgExecutor<'e> + 'e,
    T: for<'r> FromRow<'r, PgRow> + Send,
{
    let mut rows = sqlx::query(sql).bind(key).fetch(executor);
    let mut records = Vec::new();

    while let Some(row) = rows
        .try_next()
        .await
        .map_err(|err| DbError::classify(err, records.len()))?
    {
        let record = T::from_row(&row).map_err(|err| DbError::classify(err, records.len()))?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Course, Project, User};
    use sqlx::postgres::PgPoolOptions;
    use sqlx::PgPool;

    /// A pool that is already closed, so every query fails before dispatch.
    async fn severed_pool() -> PgPool {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect_lazy("postgres://roster@localhost:5432/roster")
            .expect("valid connection url");
        pool.close().await;
        pool
    }

    #[tokio::test]
    async fn users_for_course_reports_query_error_on_closed_pool() {
        let pool = severed_pool().await;
        let result = UserRepo::new(&pool).for_course(1).await;
        assert!(matches!(result, Err(DbError::Query(sqlx::Error::PoolClosed))));
    }

    #[tokio::test]
    async fn courses_for_user_reports_query_error_on_closed_pool() {
        let pool = severed_pool().await;
        let result = CourseRepo::new(&pool).for_user(1).await;
        assert!(matches!(result, Err(DbError::Query(sqlx::Error::PoolClosed))));
    }

    #[tokio::test]
    async fn projects_for_user_reports_query_error_on_closed_pool() {
        let pool = severed_pool().await;
        let result = ProjectRepo::new(&pool).for_user(1).await;
        assert!(matches!(result, Err(DbError::Query(sqlx::Error::PoolClosed))));
    }

    #[sqlx::test(migrator = "crate::MIGRATOR")]
    #[ignore = "requires database"]
    async fn mistyped_column_is_decode_error_with_no_records(pool: PgPool) {
        sqlx::query("INSERT INTO users (id, name) VALUES (1, 'Ada'), (2, 'Grace')")
            .execute(&pool)
            .await
            .unwrap();

        // name is TEXT, so decoding it into User::id (i64) must fail on the first row
        let result = fetch_keyed::<_, User>(
            &pool,
            "SELECT name AS id, name FROM users WHERE id >= $1 ORDER BY id",
            1,
        )
        .await;

        match result {
            Err(DbError::Decode { row, .. }) => assert_eq!(row, 0),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[sqlx::test(migrator = "crate::MIGRATOR")]
    #[ignore = "requires database"]
    async fn decode_failure_after_first_row_discards_decoded_records(pool: PgPool) {
        sqlx::query("INSERT INTO users (id, name) VALUES (1, 'Ada'), (2, 'Grace')")
            .execute(&pool)
            .await
            .unwrap();

        // the first row decodes, the second has a NULL id
        let result = fetch_keyed::<_, User>(
            &pool,
            "SELECT CASE WHEN id = 1 THEN id ELSE NULL END AS id, name \
             FROM users WHERE id >= $1 ORDER BY id",
            1,
        )
        .await;

        match result {
            Err(DbError::Decode { row, .. }) => assert_eq!(row, 1),
            other => panic!("expected decode error at row 1, got {other:?}"),
        }
    }

    #[sqlx::test(migrator = "crate::MIGRATOR")]
    #[ignore = "requires database"]
    async fn failure_mid_stream_is_cursor_error(pool: PgPool) {
        // g = 2 divides by zero after g = 1 has been sent; no ORDER BY, or the
        // server evaluates every row before sending the first
        let result = fetch_keyed::<_, User>(
            &pool,
            "SELECT g AS id, (1 / (2 - g))::text AS name FROM generate_series($1::bigint, 3) g",
            1,
        )
        .await;

        match result {
            Err(DbError::Cursor { rows, source }) => {
                assert_eq!(rows, 1);
                assert!(source.to_string().contains("division by zero"));
            }
            other => panic!("expected cursor error after one row, got {other:?}"),
        }
    }

    #[sqlx::test(migrator = "crate::MIGRATOR")]
    #[ignore = "requires database"]
    async fn missing_column_is_decode_error(pool: PgPool) {
        sqlx::query("INSERT INTO users (id, name) VALUES (1, 'Ada')")
            .execute(&pool)
            .await
            .unwrap();

        let result =
            fetch_keyed::<_, Project>(&pool, "SELECT id, name FROM users WHERE id = $1", 1).await;
        assert!(result.is_err_and(|err| err.is_decode()));
    }

    #[sqlx::test(migrator = "crate::MIGRATOR")]
    #[ignore = "requires database"]
    async fn fetch_runs_inside_a_transaction(pool: PgPool) {
        let mut tx = pool.begin().await.unwrap();
        sqlx::query("INSERT INTO courses (id, title, hashtags) VALUES (5, 'Rust', '{rust}')")
            .execute(&mut *tx)
            .await
            .unwrap();

        let courses: Vec<Course> = fetch_keyed(
            &mut *tx,
            "SELECT id, created_at, title, hashtags FROM courses WHERE id = $1",
            5,
        )
        .await
        .unwrap();
        tx.rollback().await.unwrap();

        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].hashtags, vec!["rust".to_owned()]);
    }
}
