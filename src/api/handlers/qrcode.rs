//! Handler for the QR code endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::qrcode::{QrParams, QrResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// File name prefix for stored QR artifacts.
const QR_PREFIX: &str = "qrcode";

/// Encodes arbitrary text into a QR code and stores it as an artifact.
///
/// # Endpoint
///
/// `GET /api/qrcode?text=<content>`
///
/// Every request gets its own uniquely-named artifact, so concurrent calls
/// with identical text never overwrite each other.
///
/// # Response
///
/// ```json
/// {
///   "message": "QR code generated",
///   "qr_code_path": "/static/qrcode-oVBeFslYGJg1.svg"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when `text` is missing or empty, and 500 Internal
/// Server Error when the encoder rejects the input or the artifact cannot be
/// written.
pub async fn qrcode_handler(
    State(state): State<AppState>,
    Query(params): Query<QrParams>,
) -> Result<Json<QrResponse>, ApiError> {
    let text = match params.text.as_deref() {
        Some(t) if !t.is_empty() => t,
        _ => return Err(ApiError::validation("text is required")),
    };

    let image = state.qr.encode(text)?;
    let artifact = state
        .artifacts
        .store(QR_PREFIX, image.extension, &image.bytes)
        .await?;

    Ok(Json(QrResponse {
        message: "QR code generated".to_string(),
        qr_code_path: artifact.public_path,
    }))
}
