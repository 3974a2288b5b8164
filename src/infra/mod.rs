//! Infrastructure layer - Storage concerns
//!
//! Repository records live in process memory only; nothing survives a
//! restart.

pub mod repositories;

pub use repositories::{InMemoryRepositoryStore, RepositoryStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockRepositoryStore;
