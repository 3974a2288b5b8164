//! Lenient JSON extractor - Accepts bodies the way a plain JSON middleware does.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::AppError;

/// JSON body extractor with `express.json()`-style leniency.
///
/// - A request whose `Content-Type` is not `application/json` is not parsed
///   and yields `T::default()`, as does an empty body.
/// - A top-level array yields `T::default()`.
/// - Malformed JSON, a top-level primitive, or a field of the wrong type is
///   rejected with [`AppError::MalformedBody`].
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json_content_type(req.headers()) {
            return Ok(JsonBody(T::default()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::malformed_body(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(T::default()));
        }

        let value: Value =
            serde_json::from_slice(&bytes).map_err(|e| AppError::malformed_body(e.to_string()))?;

        match value {
            Value::Object(_) => serde_json::from_value(value)
                .map(JsonBody)
                .map_err(|e| AppError::malformed_body(e.to_string())),
            Value::Array(_) => Ok(JsonBody(T::default())),
            _ => Err(AppError::malformed_body(
                "JSON body must be an object or an array",
            )),
        }
    }
}

/// `application/json`, ignoring parameters such as `charset`
fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}
