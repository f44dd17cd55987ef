//! Shared application state for all routes.

use crate::store::StudentStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StudentStore>,
}

impl AppState {
    pub fn new(store: impl StudentStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
