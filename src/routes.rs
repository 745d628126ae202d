//! Full application router.
//!
//! Three surfaces share one tree: the `/api` dispatch endpoints (rate
//! limited), the `/health` probe, and `/static` for generated artifacts.
//! Unmatched paths and wrong methods on known paths both get the JSON 404
//! envelope. Trailing slashes are stripped before routing, so `/api/get/`
//! resolves to `/api/get`.

use crate::api;
use crate::api::handlers::{health_handler, not_found_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Assembles routes, middleware and state into the serveable app.
///
/// With `behind_proxy` set, the rate limiter takes the client identity from
/// `X-Forwarded-For` / `X-Real-IP` rather than the peer socket address.
/// Only set it when a trusted reverse proxy terminates client traffic.
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let api = if behind_proxy {
        api::routes::routes().layer(rate_limit::proxy_layer())
    } else {
        api::routes::routes().layer(rate_limit::layer())
    };

    let statics = ServeDir::new(state.artifacts.root().to_path_buf());

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api)
        .nest_service("/static", statics)
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
