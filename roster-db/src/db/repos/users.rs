//! User repository
//!
//! Users enrolled in a course, via the `course_user` membership table.

use sqlx::{PgExecutor, PgPool};
use tracing::debug;

use super::fetch_keyed;
use crate::{DbError, User};

const USERS_FOR_COURSE: &str = r#"
    SELECT users.id, users.name
    FROM users
    INNER JOIN course_user ON users.id = course_user.user_id
    WHERE course_user.course_id = $1
"#;

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All users enrolled in `course_id`, in database order.
    ///
    /// An unknown course or one with no members yields an empty list.
    pub async fn for_course(&self, course_id: i64) -> Result<Vec<User>, DbError> {
        users_for_course(self.pool, course_id).await
    }
}

/// Same as [`UserRepo::for_course`] on any executor (pool, connection or transaction).
pub async fn users_for_course<'e, E>(executor: E, course_id: i64) -> Result<Vec<User>, DbError>
where
    E: PgExecutor<'e> + 'e,
{
    let users: Vec<User> = fetch_keyed(executor, USERS_FOR_COURSE, course_id).await?;
    debug!(course_id, count = users.len(), "fetched users for course");
    Ok(users)
}
