//! Application state shared across handlers

use std::sync::Arc;

use crate::db::ProductStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ProductStore>,
}

impl AppState {
    pub fn new<S>(store: S) -> Self
    where
        S: ProductStore + 'static,
    {
        Self::with_store(Arc::new(store))
    }

    /// Build from a store the caller keeps a handle to.
    pub fn with_store(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn ProductStore {
        self.store.as_ref()
    }
}
