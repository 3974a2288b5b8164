//! Custom request extractors.

mod json_body;
mod repository_id;

pub use json_body::JsonBody;
pub use repository_id::{validate_repository_id, RepositoryId};
