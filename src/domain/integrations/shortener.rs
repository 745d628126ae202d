//! Client contract for the URL shortening service.

use async_trait::async_trait;

use super::error::IntegrationError;

/// Outbound client for a URL shortening service.
///
/// Implementations must be thread-safe and apply a bounded timeout to every
/// call: the dispatcher is synchronous per request, and an unbounded outbound
/// call would pin the serving task for as long as the remote hangs.
///
/// # Implementations
///
/// - [`crate::infrastructure::TinyUrlClient`] - TinyURL-compatible HTTP API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlShortener: Send + Sync {
    /// Shortens `long_url`, returning the short URL on success.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationError::Unavailable`] on non-2xx responses,
    /// network failures, and timeouts. Implementations may retry a failed
    /// call once (the call is an idempotent GET) but must keep the total
    /// wait bounded.
    async fn shorten(&self, long_url: &str) -> Result<String, IntegrationError>;
}
