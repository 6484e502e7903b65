//! Column decoding helpers shared by the record types.

use sqlx::postgres::PgRow;
use sqlx::Row;

/// Decode a native text array column into an ordered list of strings.
///
/// Element order is preserved exactly as stored. A SQL `NULL` array decodes
/// to an empty list so callers never have to tell "no array" from "empty
/// array" apart.
pub fn text_array(row: &PgRow, column: &str) -> Result<Vec<String>, sqlx::Error> {
    let values: Option<Vec<String>> = row.try_get(column)?;
    Ok(values.unwrap_or_default())
}
