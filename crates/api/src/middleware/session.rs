//! Extractor for handlers that need a signed-in admin.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use showcase_core::error::CoreError;

use crate::auth::session::{Session, SessionLookup};
use crate::error::AppError;
use crate::state::AppState;

/// Requires a valid session cookie. Rejects with 401 otherwise.
///
/// Reuses the [`Session`] already stored by the dashboard gate when present.
///
/// ```ignore
/// async fn whoami(RequireSession(session): RequireSession) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireSession(pub Session);

impl FromRequestParts<AppState> for RequireSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(session) = parts.extensions.get::<Session>() {
            return Ok(RequireSession(session.clone()));
        }

        state
            .sessions
            .get_session(&parts.headers)
            .await
            .map(RequireSession)
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Not authenticated".into())))
    }
}
