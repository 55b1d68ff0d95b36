//! Handlers for admin sign-in, session lookup and sign-out.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use showcase_core::error::CoreError;

use super::content::{json_body, JsonBody};
use crate::auth::password::verify_password;
use crate::auth::session::ADMIN_ROLE;
use crate::error::{AppError, AppResult};
use crate::middleware::session::RequireSession;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `{ "success": true, "user": { email, role } }`.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub success: bool,
    pub user: UserInfo,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub email: String,
    pub role: String,
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Check the credentials against the configured admin account and set the
/// session cookie.
pub async fn login(
    State(state): State<AppState>,
    payload: JsonBody,
) -> AppResult<impl IntoResponse> {
    let input: LoginRequest = serde_json::from_value(json_body(payload)?)
        .map_err(|_| AppError::BadRequest("Email and password are required".into()))?;

    let admin = &state.config.admin;
    let (Some(admin_email), Some(password_hash)) =
        (admin.email.as_deref(), admin.password_hash.as_deref())
    else {
        return Err(AppError::Core(CoreError::Configuration(
            "Admin credentials are not configured".into(),
        )));
    };

    if !input.email.trim().eq_ignore_ascii_case(admin_email) {
        tracing::warn!("Login attempt with unknown email");
        return Err(invalid_credentials());
    }

    let password_valid = verify_password(&input.password, password_hash).map_err(|e| {
        AppError::Core(CoreError::Configuration(format!(
            "ADMIN_PASSWORD_HASH is not a valid password hash: {e}"
        )))
    })?;
    if !password_valid {
        tracing::warn!("Login attempt with wrong password");
        return Err(invalid_credentials());
    }

    let token = state
        .sessions
        .issue(admin_email, ADMIN_ROLE)
        .map_err(|e| AppError::Core(CoreError::Internal(format!("Session signing failed: {e}"))))?;

    tracing::info!("Admin signed in");

    Ok((
        [(SET_COOKIE, state.sessions.session_cookie(&token))],
        Json(SessionResponse {
            success: true,
            user: UserInfo {
                email: admin_email.to_string(),
                role: ADMIN_ROLE.to_string(),
            },
        }),
    ))
}

/// GET /api/auth/session
pub async fn session(RequireSession(session): RequireSession) -> AppResult<Json<SessionResponse>> {
    Ok(Json(SessionResponse {
        success: true,
        user: UserInfo {
            email: session.email,
            role: session.role,
        },
    }))
}

/// POST /api/admin/logout
///
/// Always succeeds and always clears the cookie, signed in or not.
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(SET_COOKIE, state.sessions.clear_cookie())],
        Json(MessageResponse::new("Logged out successfully")),
    )
}
