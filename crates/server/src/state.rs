use std::sync::Arc;

use configs::IdStrategy;
use service::items::{ItemRepository, ItemStore};

/// Shared handler state. The item collection is owned here and nowhere else.
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn ItemRepository>,
}

impl AppState {
    pub fn new(items: Arc<dyn ItemRepository>) -> Self {
        Self { items }
    }

    /// Fresh, empty in-memory store.
    pub fn in_memory(id_strategy: IdStrategy) -> Self {
        Self::new(ItemStore::new(id_strategy))
    }
}
