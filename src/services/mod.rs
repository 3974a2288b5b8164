//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and storage to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod repository_service;

pub use repository_service::{RepositoryManager, RepositoryService};
