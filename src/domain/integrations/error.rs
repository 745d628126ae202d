//! Error contract shared by all integration clients.

use std::time::Duration;

/// Errors produced by outbound integration calls.
///
/// Every integration client maps its library- or transport-specific failures
/// into this enum at the client boundary, so handlers only ever deal with one
/// error shape. The variant decides the HTTP status the caller sees (see
/// [`crate::error::ApiError`]).
#[derive(Debug, thiserror::Error)]
pub enum IntegrationError {
    /// The downstream service could not be reached or answered with a failure.
    ///
    /// Covers connect errors, non-2xx responses, and transfer failures. For
    /// the shortener this also covers per-request timeouts: its endpoint
    /// reports plain unavailability rather than a gateway timeout.
    #[error("{service} unavailable: {reason}")]
    Unavailable {
        service: &'static str,
        reason: String,
    },

    /// The call exceeded its configured overall time bound.
    ///
    /// Surfaced as `504 Gateway Timeout`. Only the media fetcher produces
    /// this variant; see [`IntegrationError::Unavailable`] for the shortener.
    #[error("{service} timed out after {limit:?}")]
    Timeout {
        service: &'static str,
        limit: Duration,
    },

    /// The local encoder rejected the input (e.g. payload too large for a
    /// QR symbol).
    #[error("encoding failed: {reason}")]
    Encoding { reason: String },
}

impl IntegrationError {
    pub fn unavailable(service: &'static str, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            service,
            reason: reason.into(),
        }
    }

    pub fn timeout(service: &'static str, limit: Duration) -> Self {
        Self::Timeout { service, limit }
    }

    pub fn encoding(reason: impl Into<String>) -> Self {
        Self::Encoding {
            reason: reason.into(),
        }
    }

    /// Whether a retry may reasonably succeed.
    ///
    /// Only plain unavailability is retried. Timeouts are not: the attempt
    /// already ran for the full timeout once. Encoding failures are
    /// deterministic.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}
