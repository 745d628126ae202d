//! DTOs for the URL shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for the shortening endpoint.
///
/// `url` is optional at the type level so a missing parameter can be reported
/// as its own validation failure instead of a deserialization rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenParams {
    /// The long URL to shorten (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub url: Option<String>,
}

/// Response carrying the shortened URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub tiny_url: String,
}
