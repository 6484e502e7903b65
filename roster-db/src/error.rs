//! Error taxonomy for the data access layer.
//!
//! Every fetch reports the first failure it hits and nothing else. Which
//! variant is produced depends on what failed and how far the row loop got:
//!
//! - a column that cannot be mapped onto a record field is a [`DbError::Decode`]
//! - anything else before the first row arrives is a [`DbError::Query`]
//! - anything else after that is a [`DbError::Cursor`]

use thiserror::Error;

/// Result alias for roster-db operations
pub type Result<T> = std::result::Result<T, DbError>;

#[derive(Debug, Error)]
pub enum DbError {
    /// Submitting or executing the query failed (connectivity, SQL error,
    /// closed or exhausted pool).
    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),

    /// A row's columns did not match the record's field types.
    #[error("failed to decode row {row}: {source}")]
    Decode {
        row: usize,
        #[source]
        source: sqlx::Error,
    },

    /// The result stream broke after rows had already been received.
    #[error("cursor failed after {rows} rows: {source}")]
    Cursor {
        rows: usize,
        #[source]
        source: sqlx::Error,
    },

    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

impl DbError {
    /// Map a driver error onto the taxonomy, given how many rows the loop
    /// had already accepted when it occurred.
    pub fn classify(err: sqlx::Error, rows_seen: usize) -> Self {
        if is_decode_failure(&err) {
            Self::Decode {
                row: rows_seen,
                source: err,
            }
        } else if rows_seen == 0 {
            Self::Query(err)
        } else {
            Self::Cursor {
                rows: rows_seen,
                source: err,
            }
        }
    }

    pub fn is_query(&self) -> bool {
        matches!(self, Self::Query(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    pub fn is_cursor(&self) -> bool {
        matches!(self, Self::Cursor { .. })
    }
}

fn is_decode_failure(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::TypeNotFound { .. }
    )
}
