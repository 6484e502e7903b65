//! Project repository
//!
//! Projects reachable from a user: course_user -> courses -> projects.

use sqlx::{PgExecutor, PgPool};
use tracing::debug;

use super::fetch_keyed;
use crate::{DbError, Project};

const PROJECTS_FOR_USER: &str = r#"
    SELECT projects.id, projects.name, projects.content
    FROM courses
    INNER JOIN course_user ON courses.id = course_user.course_id
    INNER JOIN projects ON courses.id = projects.course_id
    WHERE course_user.user_id = $1
"#;

/// Project repository
pub struct ProjectRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ProjectRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Every project belonging to a course `user_id` is enrolled in.
    ///
    /// Courses without projects contribute nothing.
    pub async fn for_user(&self, user_id: i64) -> Result<Vec<Project>, DbError> {
        projects_for_user(self.pool, user_id).await
    }
}

pub async fn projects_for_user<'e, E>(executor: E, user_id: i64) -> Result<Vec<Project>, DbError>
where
    E: PgExecutor<'e> + 'e,
{
    let projects: Vec<Project> = fetch_keyed(executor, PROJECTS_FOR_USER, user_id).await?;
    debug!(user_id, count = projects.len(), "fetched projects for user");
    Ok(projects)
}
