use std::sync::Arc;

use crate::database::ActivityStore;

/// Shared handler context. Owns the Store for the lifetime of the router.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ActivityStore>,
    pub enforce_capacity: bool,
}

impl AppState {
    pub fn new(store: ActivityStore) -> Self {
        Self {
            store: Arc::new(store),
            enforce_capacity: false,
        }
    }

    pub fn with_capacity_enforcement(mut self, enforce: bool) -> Self {
        self.enforce_capacity = enforce;
        self
    }
}
