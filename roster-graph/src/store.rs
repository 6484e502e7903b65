//! Task store capability
//!
//! The store itself lives elsewhere; this is the contract resolvers are
//! allowed to rely on.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A task as exposed by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub text: String,
    pub tags: Vec<String>,
    pub due: DateTime<Utc>,
}

/// Error reported by a store implementation
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("task store unavailable: {0}")]
    Unavailable(String),
}

/// Read access to tasks (testable)
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Look up one task; `Ok(None)` when no task has this id.
    async fn get_task(&self, id: i64) -> Result<Option<Task>, StoreError>;

    async fn all_tasks(&self) -> Result<Vec<Task>, StoreError>;

    /// Tasks carrying `tag` among their tags.
    async fn tasks_by_tag(&self, tag: &str) -> Result<Vec<Task>, StoreError>;

    /// Tasks whose due timestamp falls on `date` (UTC).
    async fn tasks_by_due_date(&self, date: NaiveDate) -> Result<Vec<Task>, StoreError>;
}
