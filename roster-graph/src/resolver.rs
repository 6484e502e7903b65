//! Resolver root
//!
//! Resolvers hang off this type. It carries its dependencies and nothing
//! else; add new dependencies as constructor arguments.

use std::fmt;
use std::sync::Arc;

use crate::store::TaskStore;

/// Shared resolver state
#[derive(Clone)]
pub struct Resolver {
    store: Arc<dyn TaskStore>,
}

impl Resolver {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn TaskStore {
        self.store.as_ref()
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver").finish_non_exhaustive()
    }
}
