//! Prometheus exposition endpoint.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

use crate::app_state::AppState;

pub const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// `GET /metrics`: render the registry against a fresh snapshot.
///
/// The failure branch stays plain text, matching the success content type.
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    match state.provider().sample().await {
        Ok(snap) => {
            let body = state.metrics().render(&snap);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)],
                body,
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "metrics exposition failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                e.to_string(),
            )
        }
    }
}
