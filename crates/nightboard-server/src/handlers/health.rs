//! Health endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use crate::app_state::AppState;
use crate::SERVICE_NAME;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
    service: &'static str,
    timestamp: String,
    version: String,
    metrics: HealthMetrics,
}

#[derive(Serialize)]
struct HealthMetrics {
    memory_usage: f32,
    cpu_usage: f32,
    disk_usage: f32,
    uptime: u64,
}

/// `GET /health`: threshold checks over a fresh snapshot.
///
/// Memory and CPU degrade independently; either alone is enough. A sampling
/// failure is the one error path: 500 with `{status: "unhealthy", error}`.
pub async fn health(State(state): State<AppState>) -> Response {
    match state.provider().sample().await {
        Ok(snap) => {
            let body = HealthBody {
                status: snap.health_state().as_str(),
                service: SERVICE_NAME,
                timestamp: Utc::now().to_rfc3339(),
                version: state.cfg().version.clone(),
                metrics: HealthMetrics {
                    memory_usage: snap.memory_percent,
                    cpu_usage: snap.cpu_percent,
                    disk_usage: snap.disk_percent,
                    uptime: snap.uptime_seconds(),
                },
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "health check failed");
            let body = json!({
                "status": "unhealthy",
                "error": e.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
