//! Landing page.

use axum::extract::State;
use axum::response::Html;

use crate::app_state::AppState;
use crate::pages;

/// `GET /`: render the demo page with config values and a fresh snapshot.
///
/// Never fails: if sampling is unavailable the page renders placeholders.
pub async fn home(State(state): State<AppState>) -> Html<String> {
    let snapshot = match state.provider().sample().await {
        Ok(snap) => Some(snap),
        Err(e) => {
            tracing::warn!(error = %e, "stats unavailable for landing page");
            None
        }
    };
    Html(pages::render_home(state.cfg(), snapshot.as_ref()))
}
