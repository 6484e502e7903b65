//! roster-db: read-only access to users, courses and projects
//!
//! Every fetch takes a live pool (or any other Postgres executor) plus one
//! key, runs a single join query and streams the result rows into records.
//! The crate keeps no state between calls.

pub mod db;
pub mod decode;
pub mod error;
pub mod models;

pub use db::migrations::MIGRATOR;
pub use db::pool::{
    create_pool, create_pool_with_options, DEFAULT_ACQUIRE_TIMEOUT, DEFAULT_MAX_CONNECTIONS,
};
pub use db::repos::{
    courses_for_user, projects_for_user, users_for_course, CourseRepo, ProjectRepo, UserRepo,
};
pub use error::{DbError, Result};
pub use models::{Course, Project, User};
pub use sqlx::PgPool;
