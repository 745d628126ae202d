//! Server bootstrap and lifecycle.
//!
//! Builds the artifact store and the three integration clients, assembles
//! shared state, and serves the app until Ctrl-C or SIGTERM.

use crate::config::Config;
use crate::infrastructure::{ArtifactStore, HttpMediaFetcher, SvgQrEncoder, TinyUrlClient};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Brings the service up and serves until a shutdown signal arrives.
///
/// The artifact directory is created if missing, the shortener and media
/// clients get their timeouts from `config`, and the listener binds with
/// connect info so the rate limiter can see peer addresses.
///
/// # Errors
///
/// Fails when the artifact directory cannot be created, an HTTP client
/// cannot be built, or the listener cannot bind.
pub async fn run(config: Config) -> Result<()> {
    let artifacts = Arc::new(
        ArtifactStore::new(&config.artifacts_dir)
            .with_context(|| format!("creating artifact directory {}", config.artifacts_dir))?,
    );
    tracing::info!("Artifact store ready at {}", config.artifacts_dir);

    let shortener = TinyUrlClient::new(
        &config.shortener_base_url,
        config.shortener_timeout(),
        config.shortener_retries,
    )
    .context("building shortener client")?;

    let media = HttpMediaFetcher::new(
        artifacts.clone(),
        config.media_deadline(),
        config.media_max_bytes,
    )
    .context("building media fetch client")?;

    let state = AppState {
        shortener: Arc::new(shortener),
        qr: Arc::new(SvgQrEncoder::new()),
        media: Arc::new(media),
        artifacts,
    };

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves when the process receives Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to register Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to register SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl-C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
