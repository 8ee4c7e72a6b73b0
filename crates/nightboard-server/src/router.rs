//! Axum router wiring.

use axum::middleware;
use axum::routing::get;
use axum::Router;

use crate::{app_state::AppState, handlers, obs};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .route("/logs", get(handlers::logs))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            obs::track_requests,
        ))
        .with_state(state)
}
