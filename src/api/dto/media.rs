//! DTOs for the media download endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for the media download endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct DownloadParams {
    /// Source media URL (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub url: Option<String>,
}

/// Response confirming a completed download.
#[derive(Debug, Serialize)]
pub struct DownloadResponse {
    pub message: String,
    pub data: MediaInfo,
}

/// Details of the stored media artifact.
#[derive(Debug, Serialize)]
pub struct MediaInfo {
    pub file: String,
    pub path: String,
    pub bytes: u64,
    pub sha256: String,
}
