//! Repository layer - Data access abstraction
//!
//! Stores provide an abstraction over where records are kept,
//! following the Repository pattern for clean separation of concerns.

mod repository_store;

pub use repository_store::{InMemoryRepositoryStore, RepositoryStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use repository_store::MockRepositoryStore;
