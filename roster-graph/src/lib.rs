//! roster-graph: dependency injection for GraphQL resolvers
//!
//! Resolvers reach tasks only through the [`TaskStore`] capability, which is
//! handed to [`Resolver::new`] by whoever assembles the application.

pub mod resolver;
pub mod store;

pub use resolver::Resolver;
pub use store::{StoreError, Task, TaskStore};
