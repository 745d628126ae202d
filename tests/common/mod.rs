#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use tempfile::TempDir;
use web_toolbox::domain::integrations::{
    FetchedMedia, IntegrationError, MediaFetcher, UrlShortener,
};
use web_toolbox::infrastructure::{ArtifactStore, SvgQrEncoder};
use web_toolbox::state::AppState;

/// Shortener stub answering every call with the same short URL.
pub struct FixedShortener {
    pub tiny_url: String,
}

#[async_trait]
impl UrlShortener for FixedShortener {
    async fn shorten(&self, _long_url: &str) -> Result<String, IntegrationError> {
        Ok(self.tiny_url.clone())
    }
}

/// Shortener stub failing every call.
pub struct FailingShortener;

#[async_trait]
impl UrlShortener for FailingShortener {
    async fn shorten(&self, _long_url: &str) -> Result<String, IntegrationError> {
        Err(IntegrationError::unavailable("shortener", "HTTP 502"))
    }
}

/// Media stub reporting a fixed completed download.
pub struct FixedMediaFetcher;

#[async_trait]
impl MediaFetcher for FixedMediaFetcher {
    async fn fetch(&self, _media_url: &str) -> Result<FetchedMedia, IntegrationError> {
        Ok(FetchedMedia {
            file_name: "media-fixture00.mp4".to_string(),
            public_path: "/static/media-fixture00.mp4".to_string(),
            bytes_written: 4,
            sha256: "0".repeat(64),
        })
    }
}

/// Builds application state over a fresh artifact directory.
///
/// The shortener and media fetcher are stubs; the QR encoder is real since
/// it has no external dependency. Swap individual fields when a test needs
/// a real client or a failing one.
pub fn create_test_state() -> (AppState, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let artifacts = Arc::new(ArtifactStore::new(dir.path()).unwrap());

    let state = AppState {
        shortener: Arc::new(FixedShortener {
            tiny_url: "https://tinyurl.com/abc123".to_string(),
        }),
        qr: Arc::new(SvgQrEncoder::new()),
        media: Arc::new(FixedMediaFetcher),
        artifacts,
    };

    (state, dir)
}

/// Serves `router` on an ephemeral local port, returning the bound address.
///
/// Used to stand in for external HTTP services so the real `reqwest`-based
/// clients can be exercised without touching the network.
pub async fn spawn_upstream(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}
