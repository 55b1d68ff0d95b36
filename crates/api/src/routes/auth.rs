use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Auth routes mounted at `/api/auth`.
///
/// ```text
/// POST /login    -> login
/// GET  /session  -> session
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/session", get(auth::session))
}
