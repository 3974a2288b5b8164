//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::config::{MSG_INTERNAL_ERROR, MSG_INVALID_REPOSITORY_ID, MSG_REPOSITORY_NOT_FOUND};

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Path id is not a well-formed UUID
    #[error("Invalid Repository ID")]
    InvalidRepositoryId,

    /// Well-formed id with no matching record
    #[error("Repository not found!")]
    RepositoryNotFound,

    /// Request body is not valid JSON
    #[error("{0}")]
    MalformedBody(String),

    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl AppError {
    /// Get HTTP status code
    ///
    /// Not-found deliberately shares 400 with the malformed-id case.
    fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRepositoryId
            | AppError::RepositoryNotFound
            | AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::InvalidRepositoryId => MSG_INVALID_REPOSITORY_ID.to_string(),
            AppError::RepositoryNotFound => MSG_REPOSITORY_NOT_FOUND.to_string(),
            AppError::MalformedBody(msg) => msg.clone(),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                MSG_INTERNAL_ERROR.to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::RepositoryNotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn malformed_body(msg: impl Into<String>) -> Self {
        AppError::MalformedBody(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
