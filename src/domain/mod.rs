//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod repository;

pub use repository::{CreateRepository, Repository, UpdateRepository};
