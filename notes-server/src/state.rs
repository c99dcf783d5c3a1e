//! Application state shared across handlers

use std::sync::Arc;

use crate::db::NoteStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn NoteStore>,
}

impl AppState {
    pub fn new(store: impl NoteStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Wrap a store that is already shared elsewhere.
    pub fn from_shared(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn NoteStore {
        self.store.as_ref()
    }
}
