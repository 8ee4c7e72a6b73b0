//! Request accounting and Prometheus exposition.

pub mod metrics;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::app_state::AppState;

/// Layer applied to every route: log the request up front, count it once the
/// inner handler has finished. Counting on completion means a request never
/// observes itself in the totals it reports.
pub async fn track_requests(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    tracing::info!(method = %method, path = %path, "request");

    let response = next.run(request).await;

    state.metrics().record(method.as_str(), &path);
    response
}
