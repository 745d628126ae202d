//! Handler for the health endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Reports service health with per-component checks.
///
/// `GET /health` answers 200 when every check passes and 503 with the same
/// body shape when one fails. The artifact store is the only component
/// checked; outbound integrations are not probed per health check, their
/// failures already surface per request.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let artifact_store = check_artifact_store(&state).await;
    let healthy = artifact_store.is_ok();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { artifact_store },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// The artifact directory must exist for the QR and media endpoints to work.
async fn check_artifact_store(state: &AppState) -> CheckStatus {
    if state.artifacts.health_check().await {
        CheckStatus::ok(format!("Directory: {}", state.artifacts.root().display()))
    } else {
        CheckStatus::error("Artifact directory unavailable")
    }
}
