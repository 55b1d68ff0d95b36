pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod health;
pub mod public;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /hero /services /digital-solutions /testimonials     public content (GET)
/// /brands /cta /gallery /social-links /faqs
/// /core-expertise /core-competencies
/// /journey-highlights /professional-journey
/// /contact                                             info (GET), message (POST)
/// /blogs, /blogs/{slug}                                published posts
///
/// /auth/login                                          sign in (POST)
/// /auth/session                                        current session (GET)
///
/// /admin/...                                           list + create per resource,
///                                                      blogs by slug, contact, logout,
///                                                      cloudinary signature / delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(public::router())
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
}
