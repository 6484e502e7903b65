//! Records returned by the fetches
//!
//! Plain projections of one database row each. They are built while the
//! result rows are decoded and belong to the caller afterwards.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

use crate::decode::text_array;

/// Course record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub hashtags: Vec<String>,
}

impl<'r> FromRow<'r, PgRow> for Course {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            created_at: row.try_get("created_at")?,
            title: row.try_get("title")?,
            hashtags: text_array(row, "hashtags")?,
        })
    }
}

/// User record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
}

/// Project record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn course_serializes_hashtags_in_order() {
        let course = Course {
            id: 7,
            created_at: Utc.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).unwrap(),
            title: "Databases".to_owned(),
            hashtags: vec!["go".to_owned(), "sql".to_owned()],
        };

        let json = serde_json_value(&course);
        assert_eq!(json["hashtags"][0], "go");
        assert_eq!(json["hashtags"][1], "sql");
        assert_eq!(json["created_at"], "2021-06-01T12:00:00Z");
    }

    #[test]
    fn empty_hashtags_serialize_as_empty_array() {
        let course = Course {
            id: 8,
            created_at: Utc.with_ymd_and_hms(2021, 6, 2, 0, 0, 0).unwrap(),
            title: "Intro".to_owned(),
            hashtags: Vec::new(),
        };

        let json = serde_json_value(&course);
        assert!(json["hashtags"].as_array().is_some_and(|tags| tags.is_empty()));
    }

    fn serde_json_value<T: Serialize>(value: &T) -> serde_json::Value {
        serde_json::to_value(value).expect("record serializes")
    }
}
