//! The admin dashboard pages and the login page, served as static files.

use std::path::Path;

use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers::dashboard;
use crate::middleware::gate::{require_session, DASHBOARD_PATH, LOGIN_PATH};
use crate::state::AppState;

/// Page routes mounted at the root.
///
/// ```text
/// GET /              -> redirect to /dashboard or /login
/// GET /login         -> <dir>/login.html
/// GET /dashboard/*   -> <dir>/*, only with a session
/// ```
pub fn router(state: AppState, dir: &Path) -> Router<AppState> {
    let gated: Router = Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(from_fn_with_state(state, require_session));

    Router::new()
        .route("/", get(dashboard::index))
        .route_service(LOGIN_PATH, ServeFile::new(dir.join("login.html")))
        .nest_service(DASHBOARD_PATH, gated)
}
