//! Repository handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};

use crate::api::extractors::{JsonBody, RepositoryId};
use crate::api::AppState;
use crate::domain::{CreateRepository, Repository, UpdateRepository};
use crate::errors::AppResult;

/// Create repository routes
pub fn repository_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_repositories).post(create_repository))
        .route("/:id", put(update_repository).delete(delete_repository))
        .route("/:id/like", post(like_repository))
}

/// List all repositories
#[utoipa::path(
    get,
    path = "/repositories",
    tag = "Repositories",
    responses(
        (status = 200, description = "All repositories in insertion order", body = Vec<Repository>)
    )
)]
pub async fn list_repositories(State(state): State<AppState>) -> AppResult<Json<Vec<Repository>>> {
    let repositories = state.repository_service.list_repositories().await?;
    Ok(Json(repositories))
}

/// Create a repository
#[utoipa::path(
    post,
    path = "/repositories",
    tag = "Repositories",
    request_body = CreateRepository,
    responses(
        (status = 200, description = "Repository created", body = Repository),
        (status = 400, description = "Malformed JSON body")
    )
)]
pub async fn create_repository(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateRepository>,
) -> AppResult<Json<Repository>> {
    let repository = state.repository_service.create_repository(payload).await?;
    Ok(Json(repository))
}

/// Update title, url and techs of a repository
#[utoipa::path(
    put,
    path = "/repositories/{id}",
    tag = "Repositories",
    request_body = UpdateRepository,
    params(
        ("id" = String, Path, description = "Repository ID")
    ),
    responses(
        (status = 200, description = "Repository updated", body = Repository),
        (status = 400, description = "Invalid repository ID or repository not found")
    )
)]
pub async fn update_repository(
    State(state): State<AppState>,
    RepositoryId(id): RepositoryId,
    JsonBody(payload): JsonBody<UpdateRepository>,
) -> AppResult<Json<Repository>> {
    let repository = state
        .repository_service
        .update_repository(id, payload)
        .await?;
    Ok(Json(repository))
}

/// Delete a repository
#[utoipa::path(
    delete,
    path = "/repositories/{id}",
    tag = "Repositories",
    params(
        ("id" = String, Path, description = "Repository ID")
    ),
    responses(
        (status = 204, description = "Repository deleted"),
        (status = 400, description = "Invalid repository ID or repository not found")
    )
)]
pub async fn delete_repository(
    State(state): State<AppState>,
    RepositoryId(id): RepositoryId,
) -> AppResult<StatusCode> {
    state.repository_service.delete_repository(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Like a repository
#[utoipa::path(
    post,
    path = "/repositories/{id}/like",
    tag = "Repositories",
    params(
        ("id" = String, Path, description = "Repository ID")
    ),
    responses(
        (status = 200, description = "Repository liked", body = Repository),
        (status = 400, description = "Invalid repository ID or repository not found")
    )
)]
pub async fn like_repository(
    State(state): State<AppState>,
    RepositoryId(id): RepositoryId,
) -> AppResult<Json<Repository>> {
    let repository = state.repository_service.like_repository(id).await?;
    Ok(Json(repository))
}
