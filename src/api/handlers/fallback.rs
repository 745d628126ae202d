//! Fallback handler for unmatched requests.

use crate::error::ApiError;

/// Answers any unrouted method+path combination with the 404 envelope.
///
/// Registered both as the router fallback and as the method-not-allowed
/// fallback, so `POST /api/get` gets the same envelope as `GET /nowhere`.
pub async fn not_found_handler() -> ApiError {
    ApiError::not_found("Resource not found")
}
