//! HTTP request handlers.

pub mod health_handler;
pub mod repository_handler;

pub use health_handler::health_routes;
pub use repository_handler::repository_routes;
