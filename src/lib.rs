//! Repo Store - In-memory repository catalogue over HTTP
//!
//! Keeps an ordered collection of repository records (title, url, techs,
//! likes) in memory and exposes list/create/update/delete/like over JSON.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Repository entity and merge rules
//! - **services**: Application use cases
//! - **infra**: In-memory store
//! - **api**: HTTP handlers, extractors, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server on the default port (3333)
//! cargo run -- serve
//!
//! # Bind elsewhere
//! cargo run -- serve --host 127.0.0.1 --port 8080
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{CreateRepository, Repository, UpdateRepository};
pub use errors::{AppError, AppResult};
