//! Integration tests for API endpoints.
//!
//! These tests drive the full router (extractors, handlers, service and
//! in-memory store) without binding a socket.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use repo_store::{create_router, AppState};

// =============================================================================
// Test Helpers
// =============================================================================

fn app() -> Router {
    create_router(AppState::in_memory())
}

/// Send a request and return the status plus the decoded JSON body, if any
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Option<Value>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    if bytes.is_empty() {
        (status, None)
    } else {
        (status, Some(serde_json::from_slice(&bytes).unwrap()))
    }
}

async fn create(app: &Router, body: Value) -> Value {
    let (status, body) = send(app, Method::POST, "/repositories", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    body.unwrap()
}

async fn list(app: &Router) -> Vec<Value> {
    let (status, body) = send(app, Method::GET, "/repositories", None).await;
    assert_eq!(status, StatusCode::OK);
    body.unwrap().as_array().unwrap().clone()
}

fn id_of(repo: &Value) -> String {
    repo["id"].as_str().unwrap().to_string()
}

fn invalid_id() -> Value {
    json!({ "error": "Invalid Repository ID" })
}

fn not_found() -> Value {
    json!({ "error": "Repository not found!" })
}

// =============================================================================
// Full Lifecycle
// =============================================================================

#[tokio::test]
async fn test_repository_lifecycle() {
    let app = app();

    let repo = create(&app, json!({ "title": "A", "url": "u", "techs": ["x"] })).await;
    let id = id_of(&repo);
    assert!(Uuid::parse_str(&id).is_ok());
    assert_eq!(
        repo,
        json!({ "id": id, "title": "A", "url": "u", "techs": ["x"], "likes": 0 })
    );

    let (status, liked) = send(&app, Method::POST, &format!("/repositories/{id}/like"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(liked.unwrap()["likes"], 1);

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/repositories/{id}"),
        Some(json!({ "title": "B" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated.unwrap(),
        json!({ "id": id, "title": "B", "url": "u", "techs": ["x"], "likes": 1 })
    );

    let (status, body) = send(&app, Method::DELETE, &format!("/repositories/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_none());

    let (status, body) = send(&app, Method::DELETE, &format!("/repositories/{id}"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.unwrap(), not_found());
}

// =============================================================================
// List & Create
// =============================================================================

#[tokio::test]
async fn test_list_starts_empty() {
    assert!(list(&app()).await.is_empty());
}

#[tokio::test]
async fn test_created_repositories_are_listed_once_in_order() {
    let app = app();

    let first = create(&app, json!({ "title": "first" })).await;
    let second = create(&app, json!({ "title": "second" })).await;
    assert_ne!(first["id"], second["id"]);

    assert_eq!(list(&app).await, vec![first, second]);
}

#[tokio::test]
async fn test_create_without_body_yields_bare_record() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/repositories", None).await;
    assert_eq!(status, StatusCode::OK);

    let repo = body.unwrap();
    assert_eq!(repo["likes"], 0);
    assert!(repo.get("title").is_none());
    assert!(repo.get("url").is_none());
    assert!(repo.get("techs").is_none());
}

#[tokio::test]
async fn test_create_ignores_client_supplied_id_and_likes() {
    let app = app();
    let forged = Uuid::new_v4().to_string();

    let repo = create(&app, json!({ "id": forged, "title": "A", "likes": 99 })).await;

    assert_ne!(repo["id"], forged);
    assert_eq!(repo["likes"], 0);
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/repositories")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"title\": "))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn test_create_rejects_wrongly_typed_fields() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/repositories",
        Some(json!({ "title": 5, "url": "u", "techs": "rust" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.unwrap()["error"].is_string());
    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn test_create_with_non_json_content_type_yields_bare_record() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/repositories")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("hello"))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let repo: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(repo["likes"], 0);
    assert!(repo.get("title").is_none());
    assert_eq!(list(&app).await.len(), 1);
}

#[tokio::test]
async fn test_create_rejects_top_level_primitive() {
    let app = app();

    let (status, _) = send(&app, Method::POST, "/repositories", Some(json!("x"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(list(&app).await.is_empty());
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_with_empty_values_keeps_fields() {
    let app = app();
    let repo = create(&app, json!({ "title": "A", "url": "u", "techs": ["x"] })).await;
    let id = id_of(&repo);

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/repositories/{id}"),
        Some(json!({ "title": "", "url": "", "techs": [] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated.unwrap(), repo);
}

#[tokio::test]
async fn test_update_cannot_change_likes() {
    let app = app();
    let id = id_of(&create(&app, json!({ "title": "A" })).await);

    let (_, updated) = send(
        &app,
        Method::PUT,
        &format!("/repositories/{id}"),
        Some(json!({ "likes": 10, "url": "https://example.com" })),
    )
    .await;

    let updated = updated.unwrap();
    assert_eq!(updated["likes"], 0);
    assert_eq!(updated["url"], "https://example.com");
}

#[tokio::test]
async fn test_update_rejects_truthy_non_string_title() {
    let app = app();
    let repo = create(&app, json!({ "title": "A", "url": "u" })).await;
    let id = id_of(&repo);

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/repositories/{id}"),
        Some(json!({ "title": 7 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.unwrap()["error"].is_string());
    assert_eq!(list(&app).await, vec![repo]);
}

// =============================================================================
// Like
// =============================================================================

#[tokio::test]
async fn test_sequential_likes_accumulate() {
    let app = app();
    let id = id_of(&create(&app, json!({ "title": "A" })).await);

    for expected in 1..=5 {
        let (status, body) =
            send(&app, Method::POST, &format!("/repositories/{id}/like"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.unwrap()["likes"], expected);
    }

    assert_eq!(list(&app).await[0]["likes"], 5);
}

// =============================================================================
// Id Guard & Not Found
// =============================================================================

#[tokio::test]
async fn test_id_routes_reject_malformed_ids() {
    let app = app();
    create(&app, json!({ "title": "A" })).await;
    let before = list(&app).await;

    let routes = [
        (Method::PUT, "/repositories/123"),
        (Method::DELETE, "/repositories/123"),
        (Method::POST, "/repositories/123/like"),
        (Method::DELETE, "/repositories/not-a-uuid"),
    ];

    for (method, uri) in routes {
        let (status, body) = send(&app, method, uri, Some(json!({ "title": "B" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body.unwrap(), invalid_id(), "{uri}");
    }

    assert_eq!(list(&app).await, before);
}

#[tokio::test]
async fn test_id_check_runs_before_body_parsing() {
    let app = app();
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/repositories/123")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, invalid_id());
}

#[tokio::test]
async fn test_id_routes_report_unknown_ids() {
    let app = app();
    let unknown = Uuid::new_v4();

    let routes = [
        (Method::PUT, format!("/repositories/{unknown}")),
        (Method::DELETE, format!("/repositories/{unknown}")),
        (Method::POST, format!("/repositories/{unknown}/like")),
    ];

    for (method, uri) in routes {
        let (status, body) = send(&app, method, &uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body.unwrap(), not_found(), "{uri}");
    }
}

#[tokio::test]
async fn test_delete_removes_exactly_one_record() {
    let app = app();
    let a = create(&app, json!({ "title": "a" })).await;
    let b = create(&app, json!({ "title": "b" })).await;
    let c = create(&app, json!({ "title": "c" })).await;

    let (status, _) = send(&app, Method::DELETE, &format!("/repositories/{}", id_of(&b)), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(list(&app).await, vec![a, c]);

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/repositories/{}/like", id_of(&b)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.unwrap(), not_found());
}

// =============================================================================
// Transport
// =============================================================================

#[tokio::test]
async fn test_json_responses_carry_content_type() {
    let request = Request::builder()
        .uri("/repositories")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let request = Request::builder()
        .uri("/repositories")
        .header(header::ORIGIN, "https://frontend.example.com")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_health_reports_repository_count() {
    let app = app();
    create(&app, json!({ "title": "A" })).await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap(), json!({ "status": "healthy", "repositories": 1 }));
}

#[tokio::test]
async fn test_openapi_document_lists_repository_paths() {
    let (status, body) = send(&app(), Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);

    let paths = &body.unwrap()["paths"];
    assert!(paths.get("/repositories").is_some());
    assert!(paths.get("/repositories/{id}/like").is_some());
}
