//! Application route configuration.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{health_routes, repository_routes};
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::{HEALTH_PATH, REPOSITORIES_PATH};

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest(HEALTH_PATH, health_routes())
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(REPOSITORIES_PATH, repository_routes())
        // Global middleware: any origin may call the API
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
