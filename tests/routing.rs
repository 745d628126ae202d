mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use axum::{Router, routing::get};
use axum_test::TestServer;
use tower::ServiceExt;
use tower_http::services::ServeDir;
use web_toolbox::api;
use web_toolbox::api::handlers::{health_handler, not_found_handler};
use web_toolbox::routes::app_router;
use web_toolbox::state::AppState;

/// The application route structure without the rate limiting layer.
///
/// The governor middleware needs real socket peer addresses, which the
/// in-process test transport does not provide, so routing behavior is
/// verified on the same route tree minus that layer.
fn routing_server(state: AppState) -> TestServer {
    let artifacts_root = state.artifacts.root().to_path_buf();

    let app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .nest_service("/static", ServeDir::new(artifacts_root))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_unknown_path_is_not_found_envelope() {
    let (state, _dir) = common::create_test_state();
    let server = routing_server(state);

    let response = server.get("/nowhere").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Resource not found"
    );
}

#[tokio::test]
async fn test_unknown_api_path_is_not_found_envelope() {
    let (state, _dir) = common::create_test_state();
    let server = routing_server(state);

    let response = server.get("/api/unknown").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Resource not found"
    );
}

#[tokio::test]
async fn test_wrong_method_on_known_path_is_not_found() {
    let (state, _dir) = common::create_test_state();
    let server = routing_server(state);

    let response = server.post("/api/get").await;
    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Resource not found"
    );

    let response = server.delete("/health").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_health_reports_healthy_store() {
    let (state, _dir) = common::create_test_state();
    let server = routing_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["artifact_store"]["status"], "ok");
}

#[tokio::test]
async fn test_health_degrades_when_store_disappears() {
    let (state, dir) = common::create_test_state();
    let server = routing_server(state);

    std::fs::remove_dir_all(dir.path()).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["artifact_store"]["status"], "error");
}

// The full router (rate limiting included) is driven with `oneshot` in
// proxy mode, where the client IP comes from headers instead of the
// socket peer address.

#[tokio::test]
async fn test_full_router_normalizes_trailing_slashes() {
    let (state, _dir) = common::create_test_state();
    let app = app_router(state, true);

    let request = Request::builder()
        .uri("/api/get/")
        .header("x-forwarded-for", "203.0.113.7")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["message"], "API is working!");
}

#[tokio::test]
async fn test_full_router_rate_limits_a_flooding_client() {
    let (state, _dir) = common::create_test_state();
    let app = app_router(state, true);

    let mut limited = false;
    for _ in 0..150 {
        let request = Request::builder()
            .uri("/api/get")
            .header("x-forwarded-for", "203.0.113.99")
            .body(Body::empty())
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            limited = true;
            break;
        }
        assert_eq!(response.status(), StatusCode::OK);
    }

    assert!(limited, "burst capacity was never exhausted");
}

#[tokio::test]
async fn test_static_serves_stored_artifacts() {
    let (state, _dir) = common::create_test_state();
    let artifact = state
        .artifacts
        .store("qrcode", "svg", b"<svg>stored</svg>")
        .await
        .unwrap();
    let server = routing_server(state);

    let response = server.get(&artifact.public_path).await;
    response.assert_status_ok();
    assert_eq!(response.text(), "<svg>stored</svg>");

    let response = server.get("/static/never-stored.svg").await;
    response.assert_status_not_found();
}
