//! Database layer - pool, schema and repositories
//!
//! # Design Principles
//!
//! - One fixed query per fetch, parameterised with `$1`
//! - Rows are streamed and decoded one at a time; the cursor is dropped on every exit path
//! - All-or-nothing results: an error discards whatever was already decoded

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
