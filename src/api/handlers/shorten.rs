//! Handler for the URL shortening endpoint.

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenParams, ShortenResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Shortens a long URL through the configured shortening service.
///
/// # Endpoint
///
/// `GET /api/tinyurl?url=<long-url>`
///
/// # Response
///
/// ```json
/// { "tiny_url": "https://tinyurl.com/abc123" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when `url` is missing, empty or not a valid URL,
/// and 500 Internal Server Error when the shortening service cannot be
/// reached after the configured retries.
pub async fn tinyurl_handler(
    State(state): State<AppState>,
    Query(params): Query<ShortenParams>,
) -> Result<Json<ShortenResponse>, ApiError> {
    let url = match params.url.as_deref() {
        Some(u) if !u.is_empty() => u,
        _ => return Err(ApiError::validation("url is required")),
    };
    params.validate()?;

    let tiny_url = state.shortener.shorten(url).await?;

    Ok(Json(ShortenResponse { tiny_url }))
}
