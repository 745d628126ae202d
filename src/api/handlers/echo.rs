//! Handlers for the echo endpoints.

use axum::Json;
use axum::extract::rejection::JsonRejection;

use crate::api::dto::echo::{GetEchoResponse, PostEchoResponse};
use crate::error::ApiError;

/// Returns a fixed probe message.
///
/// # Endpoint
///
/// `GET /api/get`
///
/// Always answers 200 with `{"message": "API is working!"}`; query parameters
/// and bodies are ignored.
pub async fn get_echo_handler() -> Json<GetEchoResponse> {
    Json(GetEchoResponse {
        message: "API is working!".to_string(),
    })
}

/// Echoes a posted JSON body back to the caller.
///
/// # Endpoint
///
/// `POST /api/post`
///
/// # Response
///
/// ```json
/// {
///   "message": "This is a POST response",
///   "data": { "any": "posted JSON" }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when the body is not parseable JSON, and when the
/// parsed body is empty (`null`, `{}`, `[]` or `""`).
pub async fn post_echo_handler(
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<PostEchoResponse>, ApiError> {
    let Json(body) = payload.map_err(|_| ApiError::validation("Invalid JSON"))?;

    if is_empty_body(&body) {
        return Err(ApiError::validation("body is required"));
    }

    Ok(Json(PostEchoResponse {
        message: "This is a POST response".to_string(),
        data: body,
    }))
}

/// A body that parsed but carries nothing worth echoing.
fn is_empty_body(body: &serde_json::Value) -> bool {
    match body {
        serde_json::Value::Null => true,
        serde_json::Value::String(s) => s.is_empty(),
        serde_json::Value::Array(items) => items.is_empty(),
        serde_json::Value::Object(fields) => fields.is_empty(),
        _ => false,
    }
}
