//! TinyURL-compatible shortener client.

use std::time::Duration;

use async_trait::async_trait;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{FixedInterval, jitter};

use crate::domain::integrations::{IntegrationError, UrlShortener};

const SERVICE: &str = "shortener";

/// Pause between a failed attempt and its retry.
const RETRY_BACKOFF_MS: u64 = 200;

/// Client for the classic TinyURL creation API.
///
/// Issues `GET {base}/api-create.php?url=<long url>` and expects the short
/// URL as a plain-text body. The base URL is configurable so tests (or a
/// self-hosted compatible service) can point it elsewhere.
///
/// # Time bound
///
/// Every attempt carries `timeout`; a failed attempt is retried at most
/// `retries` times (the call is an idempotent GET), so the worst-case wait
/// is `(retries + 1) * timeout` plus a small backoff. Timeouts surface as
/// [`IntegrationError::Unavailable`]: this endpoint reports unavailability,
/// not a gateway timeout.
pub struct TinyUrlClient {
    http: reqwest::Client,
    endpoint: String,
    timeout: Duration,
    retries: usize,
}

impl TinyUrlClient {
    /// Creates the client with its own bounded HTTP connection pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        timeout: Duration,
        retries: usize,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("web-toolbox/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint(base_url),
            timeout,
            retries,
        })
    }

    /// One shortening attempt, with every failure mode mapped to
    /// [`IntegrationError::Unavailable`].
    async fn attempt(&self, long_url: &str) -> Result<String, IntegrationError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("url", long_url)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    IntegrationError::unavailable(
                        SERVICE,
                        format!("request timed out after {:?}", self.timeout),
                    )
                } else {
                    IntegrationError::unavailable(SERVICE, format!("request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(IntegrationError::unavailable(
                SERVICE,
                format!("HTTP {status}"),
            ));
        }

        let body = response.text().await.map_err(|e| {
            IntegrationError::unavailable(SERVICE, format!("reading response failed: {e}"))
        })?;

        let short_url = body.trim();
        if short_url.is_empty() {
            return Err(IntegrationError::unavailable(SERVICE, "empty response body"));
        }

        Ok(short_url.to_string())
    }
}

#[async_trait]
impl UrlShortener for TinyUrlClient {
    async fn shorten(&self, long_url: &str) -> Result<String, IntegrationError> {
        let strategy = FixedInterval::from_millis(RETRY_BACKOFF_MS)
            .map(jitter)
            .take(self.retries);

        let result = RetryIf::spawn(
            strategy,
            || self.attempt(long_url),
            IntegrationError::is_retryable,
        )
        .await;

        match &result {
            Ok(short_url) => {
                tracing::debug!(long_url = %long_url, short_url = %short_url, "url shortened");
            }
            Err(e) => {
                tracing::warn!(long_url = %long_url, error = %e, "shortener call failed");
            }
        }

        result
    }
}

/// Builds the creation endpoint from a configured base URL.
fn endpoint(base_url: &str) -> String {
    format!("{}/api-create.php", base_url.trim_end_matches('/'))
}
