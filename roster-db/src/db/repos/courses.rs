//! Course repository
//!
//! Courses a user is enrolled in. `hashtags` is a native `TEXT[]` column and
//! is decoded by `Course`'s `FromRow` impl, not here.

use sqlx::{PgExecutor, PgPool};
use tracing::debug;

use super::fetch_keyed;
use crate::{Course, DbError};

const COURSES_FOR_USER: &str = r#"
    SELECT courses.id, courses.created_at, courses.title, courses.hashtags
    FROM courses
    INNER JOIN course_user ON courses.id = course_user.course_id
    WHERE course_user.user_id = $1
"#;

/// Course repository
pub struct CourseRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CourseRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All courses `user_id` is enrolled in, in database order.
    pub async fn for_user(&self, user_id: i64) -> Result<Vec<Course>, DbError> {
        courses_for_user(self.pool, user_id).await
    }
}

pub async fn courses_for_user<'e, E>(executor: E, user_id: i64) -> Result<Vec<Course>, DbError>
where
    E: PgExecutor<'e> + 'e,
{
    let courses: Vec<Course> = fetch_keyed(executor, COURSES_FOR_USER, user_id).await?;
    debug!(user_id, count = courses.len(), "fetched courses for user");
    Ok(courses)
}
