//! API server state

use std::sync::Arc;

use crate::store::AccountStore;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Account store the dispatcher operates on
    pub store: Arc<dyn AccountStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }
}
