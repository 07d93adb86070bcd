// GET handlers: status, health, version, api/info

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::AppState;
use crate::error::ClusterError;
use crate::version::{NAME, VERSION};

impl IntoResponse for ClusterError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

/// GET /status: one snapshot of replicas, cpu, pods and traffic.
pub(super) async fn status_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ClusterError> {
    match state.aggregator.snapshot().await {
        Ok(snapshot) => Ok(axum::Json(snapshot)),
        Err(e) => {
            tracing::warn!(error = %e, operation = "status", "snapshot failed");
            Err(e)
        }
    }
}

/// GET /health: liveness only; does not touch the cluster or the rate state.
pub(super) async fn health_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({ "status": "ok" }))
}

/// GET /version: returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/info: the namespace, deployment, autoscaler and selector being watched.
pub(super) async fn api_info_handler(State(state): State<AppState>) -> impl IntoResponse {
    axum::Json(state.target.as_ref().clone())
}
