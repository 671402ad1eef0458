use std::sync::Arc;

use crate::store::PostStore;

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
/// One `PostStore` instance shared by every request handler. The store does
/// its own locking; handlers just clone the `Arc` handle.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PostStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(PostStore::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
