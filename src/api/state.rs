//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::InMemoryRepositoryStore;
use crate::services::{RepositoryManager, RepositoryService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository service
    pub repository_service: Arc<dyn RepositoryService>,
}

impl AppState {
    /// Create new application state with a manually injected service.
    pub fn new(repository_service: Arc<dyn RepositoryService>) -> Self {
        Self { repository_service }
    }

    /// Create application state backed by an empty in-memory store.
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryRepositoryStore::new());
        Self::new(Arc::new(RepositoryManager::new(store)))
    }
}
