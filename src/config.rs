//! Environment-based service configuration.
//!
//! Read once at startup, validated before anything binds. Every variable has
//! a default, so the service runs without any environment set.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Trust X-Forwarded-For / X-Real-IP for rate limiting (default: `false`)
//! - `ARTIFACTS_DIR` - Directory for generated files served under `/static` (default: `./artifacts`)
//! - `SHORTENER_BASE_URL` - TinyURL API base (default: `https://tinyurl.com`)
//! - `SHORTENER_TIMEOUT_SECS` - Per-attempt shortener timeout (default: 5, max: 60)
//! - `SHORTENER_RETRIES` - Extra shortener attempts after a failure (default: 1, max: 3)
//! - `MEDIA_TIMEOUT_SECS` - Whole-download deadline for media fetches (default: 60, max: 3600)
//! - `MEDIA_MAX_BYTES` - Cap on a single downloaded file (default: 536870912)

use anyhow::Result;
use std::env;
use std::time::Duration;

/// Runtime settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Take the client IP for rate limiting from forwarded headers.
    /// Only safe behind a trusted reverse proxy.
    pub behind_proxy: bool,
    /// Directory generated artifacts (QR codes, downloaded media) are written to.
    /// Created at startup if missing and served read-only under `/static`.
    pub artifacts_dir: String,
    /// Base URL of the TinyURL-compatible shortening API.
    pub shortener_base_url: String,
    /// Timeout for a single shortener attempt in seconds.
    pub shortener_timeout_secs: u64,
    /// How many times a failed shortener call is retried before giving up.
    pub shortener_retries: usize,
    /// Deadline for a whole media download in seconds.
    pub media_timeout_secs: u64,
    /// Maximum size of a single downloaded media file in bytes.
    pub media_max_bytes: u64,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let artifacts_dir =
            env::var("ARTIFACTS_DIR").unwrap_or_else(|_| "./artifacts".to_string());

        let shortener_base_url =
            env::var("SHORTENER_BASE_URL").unwrap_or_else(|_| "https://tinyurl.com".to_string());

        let shortener_timeout_secs = env::var("SHORTENER_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let shortener_retries = env::var("SHORTENER_RETRIES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1);

        let media_timeout_secs = env::var("MEDIA_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);

        let media_max_bytes = env::var("MEDIA_MAX_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(512 * 1024 * 1024);

        Self {
            listen_addr,
            log_level,
            log_format,
            behind_proxy,
            artifacts_dir,
            shortener_base_url,
            shortener_timeout_secs,
            shortener_retries,
            media_timeout_secs,
            media_max_bytes,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `shortener_base_url` is not an http(s) URL
    /// - a timeout, retry count or size cap is outside its allowed range
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.artifacts_dir.is_empty() {
            anyhow::bail!("ARTIFACTS_DIR must not be empty");
        }

        if !self.shortener_base_url.starts_with("http://")
            && !self.shortener_base_url.starts_with("https://")
        {
            anyhow::bail!(
                "SHORTENER_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.shortener_base_url
            );
        }

        // The retry policy multiplies the per-attempt timeout, so both stay
        // tightly bounded.
        if self.shortener_timeout_secs == 0 || self.shortener_timeout_secs > 60 {
            anyhow::bail!(
                "SHORTENER_TIMEOUT_SECS must be between 1 and 60, got {}",
                self.shortener_timeout_secs
            );
        }

        if self.shortener_retries > 3 {
            anyhow::bail!(
                "SHORTENER_RETRIES must be at most 3, got {}",
                self.shortener_retries
            );
        }

        if self.media_timeout_secs == 0 || self.media_timeout_secs > 3600 {
            anyhow::bail!(
                "MEDIA_TIMEOUT_SECS must be between 1 and 3600, got {}",
                self.media_timeout_secs
            );
        }

        if self.media_max_bytes == 0 {
            anyhow::bail!("MEDIA_MAX_BYTES must be greater than 0");
        }

        Ok(())
    }

    /// Timeout for a single shortener attempt.
    pub fn shortener_timeout(&self) -> Duration {
        Duration::from_secs(self.shortener_timeout_secs)
    }

    /// Deadline for a whole media download.
    pub fn media_deadline(&self) -> Duration {
        Duration::from_secs(self.media_timeout_secs)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Artifacts directory: {}", self.artifacts_dir);
        tracing::info!("  Shortener endpoint: {}", self.shortener_base_url);
        tracing::info!(
            "  Shortener timeout: {}s ({} retries)",
            self.shortener_timeout_secs,
            self.shortener_retries
        );
        tracing::info!(
            "  Media deadline: {}s (cap {} bytes)",
            self.media_timeout_secs,
            self.media_max_bytes
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration in one step.
///
/// Call after `.env` handling; this reads the process environment as is.
///
/// # Errors
///
/// Returns an error if validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
