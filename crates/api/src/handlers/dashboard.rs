//! Handlers for the root path in front of the dashboard.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Redirect;

use crate::middleware::gate::{evaluate_gate, GateDecision, DASHBOARD_PATH};
use crate::state::AppState;

/// GET / -- signed-in visitors go to the dashboard, everyone else to login.
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Redirect {
    match evaluate_gate(state.sessions.as_ref(), &headers).await {
        GateDecision::Allow(_) => Redirect::temporary(DASHBOARD_PATH),
        GateDecision::Redirect(location) => Redirect::temporary(location),
    }
}
