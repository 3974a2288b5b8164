//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{health_handler, repository_handler};
use crate::domain::{CreateRepository, Repository, UpdateRepository};

/// OpenAPI documentation for the repository store
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Repo Store",
        version = "0.1.0",
        description = "In-memory repository catalogue with likes",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3333", description = "Local development server")
    ),
    paths(
        repository_handler::list_repositories,
        repository_handler::create_repository,
        repository_handler::update_repository,
        repository_handler::delete_repository,
        repository_handler::like_repository,
        health_handler::health_check,
    ),
    components(
        schemas(
            Repository,
            CreateRepository,
            UpdateRepository,
            health_handler::HealthResponse,
        )
    ),
    tags(
        (name = "Repositories", description = "Repository catalogue operations"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;
