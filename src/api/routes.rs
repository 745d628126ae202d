//! Route table for the `/api` surface.

use crate::api::handlers::{
    get_echo_handler, not_found_handler, post_echo_handler, qrcode_handler, tinyurl_handler,
    ytdl_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET  /get`      - Fixed probe message
/// - `POST /post`     - Echo a JSON body
/// - `GET  /tinyurl`  - Shorten a URL through the shortening service
/// - `GET  /qrcode`   - Encode text as a QR code artifact
/// - `GET  /ytdl`     - Download a media resource into the artifact store
///
/// A known path hit with the wrong method answers with the same 404
/// envelope as an unknown path.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/get", get(get_echo_handler))
        .route("/post", post(post_echo_handler))
        .route("/tinyurl", get(tinyurl_handler))
        .route("/qrcode", get(qrcode_handler))
        .route("/ytdl", get(ytdl_handler))
        .method_not_allowed_fallback(not_found_handler)
}
