//! Streaming HTTP(S) media fetcher.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use sha2::{Digest, Sha256};
use tokio::io::AsyncWriteExt;
use url::Url;

use crate::domain::integrations::{FetchedMedia, IntegrationError, MediaFetcher};
use crate::infrastructure::artifacts::ArtifactStore;

const SERVICE: &str = "media fetch";
const FILE_PREFIX: &str = "media";
const DEFAULT_EXTENSION: &str = "bin";
const MAX_EXTENSION_LEN: usize = 5;
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Downloads media resources over HTTP(S) into the artifact store.
///
/// The response body is streamed chunk-wise to a uniquely-named file while a
/// SHA-256 checksum and a running byte count are maintained; the download
/// never sits fully in memory. The whole transfer runs under `deadline`
/// ([`IntegrationError::Timeout`] past it, surfaced as 504), and `max_bytes`
/// caps how much a single request may write to disk. Aborted transfers leave
/// no partial file behind.
pub struct HttpMediaFetcher {
    http: reqwest::Client,
    store: Arc<ArtifactStore>,
    deadline: Duration,
    max_bytes: u64,
}

impl HttpMediaFetcher {
    /// Creates the fetcher.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        store: Arc<ArtifactStore>,
        deadline: Duration,
        max_bytes: u64,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(concat!("web-toolbox/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            store,
            deadline,
            max_bytes,
        })
    }

    /// Parses and vets the source URL. Only HTTP(S) sources are supported.
    fn validate_source(media_url: &str) -> Result<Url, IntegrationError> {
        let url = Url::parse(media_url).map_err(|e| {
            IntegrationError::unavailable(SERVICE, format!("invalid media URL: {e}"))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(IntegrationError::unavailable(
                SERVICE,
                format!("unsupported source scheme '{other}'"),
            )),
        }
    }

    /// Derives a safe file extension from the source URL path.
    ///
    /// Anything that is not a short alphanumeric suffix falls back to a
    /// generic extension; the artifact name must stay shell- and URL-safe.
    fn extension_for(url: &Url) -> String {
        url.path_segments()
            .and_then(|segments| segments.last())
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext)
            .filter(|ext| {
                !ext.is_empty()
                    && ext.len() <= MAX_EXTENSION_LEN
                    && ext.chars().all(|c| c.is_ascii_alphanumeric())
            })
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
    }

    /// Performs the actual transfer into `file_name`.
    async fn download(&self, url: &Url, file_name: &str) -> Result<FetchedMedia, IntegrationError> {
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| IntegrationError::unavailable(SERVICE, format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(IntegrationError::unavailable(
                SERVICE,
                format!("HTTP {status}"),
            ));
        }

        // Reject early when the source declares an oversized body; the
        // running count below still guards sources that lie or stream.
        if let Some(declared) = response.content_length()
            && declared > self.max_bytes
        {
            return Err(IntegrationError::unavailable(
                SERVICE,
                format!("media is {declared} bytes, cap is {} bytes", self.max_bytes),
            ));
        }

        let path = self.store.path_for(file_name);
        let mut file = tokio::fs::File::create(&path).await.map_err(|e| {
            IntegrationError::unavailable(SERVICE, format!("creating file failed: {e}"))
        })?;

        let mut hasher = Sha256::new();
        let mut bytes_written: u64 = 0;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| {
                IntegrationError::unavailable(SERVICE, format!("transfer failed: {e}"))
            })?;

            bytes_written += chunk.len() as u64;
            if bytes_written > self.max_bytes {
                return Err(IntegrationError::unavailable(
                    SERVICE,
                    format!("media exceeds the {} byte cap", self.max_bytes),
                ));
            }

            hasher.update(&chunk);
            file.write_all(&chunk).await.map_err(|e| {
                IntegrationError::unavailable(SERVICE, format!("writing file failed: {e}"))
            })?;
        }

        file.flush().await.map_err(|e| {
            IntegrationError::unavailable(SERVICE, format!("flushing file failed: {e}"))
        })?;

        Ok(FetchedMedia {
            file_name: file_name.to_string(),
            public_path: self.store.public_path(file_name),
            bytes_written,
            sha256: hex::encode(hasher.finalize()),
        })
    }
}

#[async_trait]
impl MediaFetcher for HttpMediaFetcher {
    async fn fetch(&self, media_url: &str) -> Result<FetchedMedia, IntegrationError> {
        let url = Self::validate_source(media_url)?;
        let file_name = self
            .store
            .unique_name(FILE_PREFIX, &Self::extension_for(&url));

        let download = self.download(&url, &file_name);
        let result = match tokio::time::timeout(self.deadline, download).await {
            Ok(result) => result,
            Err(_) => Err(IntegrationError::timeout(SERVICE, self.deadline)),
        };

        match &result {
            Ok(media) => {
                tracing::debug!(
                    url = %url,
                    file = %media.file_name,
                    bytes = media.bytes_written,
                    "media stored"
                );
            }
            Err(e) => {
                // The deadline may have cut the transfer mid-write.
                self.store.discard(&file_name).await;
                tracing::warn!(url = %url, error = %e, "media fetch failed");
            }
        }

        result
    }
}
