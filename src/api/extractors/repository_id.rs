//! Repository id extractor - Guards every route that addresses one record.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Hyphenated UUID, versions 1-5 with the RFC 4122 variant, or the nil UUID.
static UUID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}|00000000-0000-0000-0000-000000000000)$",
    )
    .expect("valid uuid regex")
});

/// Check that `raw` is a UUID in its canonical textual form.
///
/// Simple, braced and URN forms are rejected even though [`Uuid::parse_str`]
/// accepts them.
pub fn validate_repository_id(raw: &str) -> AppResult<Uuid> {
    if !UUID_RE.is_match(raw) {
        return Err(AppError::InvalidRepositoryId);
    }
    Uuid::parse_str(raw).map_err(|_| AppError::InvalidRepositoryId)
}

/// Validated `:id` path segment.
///
/// Place it before any body extractor so a malformed id is rejected
/// before the handler runs.
///
/// ```rust,ignore
/// async fn like(RepositoryId(id): RepositoryId) { /* id is a Uuid */ }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepositoryId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for RepositoryId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::InvalidRepositoryId)?;

        validate_repository_id(&raw).map(RepositoryId)
    }
}
