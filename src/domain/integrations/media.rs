//! Client contract for media retrieval.

use async_trait::async_trait;

use super::error::IntegrationError;

/// Completion record for a finished media download.
///
/// `file_name` is the unique name inside the artifact directory and
/// `public_path` the URL path under which the artifact is served. The
/// checksum is computed over the streamed bytes, so callers can verify the
/// stored file without re-reading it.
#[derive(Debug, Clone)]
pub struct FetchedMedia {
    pub file_name: String,
    pub public_path: String,
    pub bytes_written: u64,
    pub sha256: String,
}

/// Outbound client that retrieves a media resource and stores it locally.
///
/// This is the longest-running integration in the service. Implementations
/// must bound the whole transfer with a deadline and clean up partial files
/// when a transfer is aborted; a hung download must never pin a serving task
/// indefinitely.
///
/// # Implementations
///
/// - [`crate::infrastructure::HttpMediaFetcher`] - streaming HTTP(S) download
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaFetcher: Send + Sync {
    /// Downloads `media_url` into the artifact store.
    ///
    /// # Errors
    ///
    /// - [`IntegrationError::Unavailable`] on invalid URLs, unsupported
    ///   schemes, non-2xx responses, and transfer failures
    /// - [`IntegrationError::Timeout`] when the transfer exceeds the
    ///   configured deadline (surfaced as `504 Gateway Timeout`)
    async fn fetch(&self, media_url: &str) -> Result<FetchedMedia, IntegrationError>;
}
