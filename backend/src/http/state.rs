//! Application state for the HTTP server.

use std::sync::Arc;

use crate::store::MarkStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of the mark list, loaded afresh by each request
    pub store: Arc<dyn MarkStore>,
}

impl AppState {
    /// Create a new application state with the given mark store.
    pub fn new(store: Arc<dyn MarkStore>) -> Self {
        Self { store }
    }
}
