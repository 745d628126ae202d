//! API error taxonomy and response envelope mapping.
//!
//! Every failed request renders as `{"error": "<detail>"}` with the status
//! code fixed by the variant. Handlers return `Result<Json<T>, ApiError>`,
//! which guarantees each request terminates with exactly one response.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::integrations::IntegrationError;

/// Error half of the response envelope.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Request-level errors with a fixed HTTP status mapping.
///
/// - [`ApiError::Validation`] → 400, client input absent or malformed
/// - [`ApiError::NotFound`] → 404, no route matches method + path
/// - [`ApiError::Integration`] → 500, downstream call failed
/// - [`ApiError::Timeout`] → 504, downstream call exceeded its bound
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Integration(String),
    #[error("{0}")]
    Timeout(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn integration(message: impl Into<String>) -> Self {
        Self::Integration(message.into())
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Integration(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
            ApiError::Timeout(message) => (StatusCode::GATEWAY_TIMEOUT, message),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Handler-boundary translation of integration failures.
///
/// Deadline overruns keep their 504 identity; every other downstream failure
/// is a plain 500. The full detail string ends up in the `error` field, so
/// no failure is silently swallowed.
impl From<IntegrationError> for ApiError {
    fn from(err: IntegrationError) -> Self {
        match err {
            IntegrationError::Timeout { .. } => Self::Timeout(err.to_string()),
            _ => Self::Integration(err.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(_, field_errors)| field_errors.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .next()
            .unwrap_or_else(|| "invalid request parameters".to_string());

        Self::Validation(message)
    }
}
