//! Session gate in front of the admin dashboard pages.

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use crate::auth::session::{Session, SessionLookup};
use crate::state::AppState;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Outcome of checking a request against the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Allow(Session),
    Redirect(&'static str),
}

/// Allow requests carrying a valid session, send the rest to the login page.
pub async fn evaluate_gate(lookup: &dyn SessionLookup, headers: &HeaderMap) -> GateDecision {
    match lookup.get_session(headers).await {
        Some(session) => GateDecision::Allow(session),
        None => GateDecision::Redirect(LOGIN_PATH),
    }
}

/// Middleware applying [`evaluate_gate`].
///
/// On allow, the [`Session`] is stored in the request extensions. On
/// redirect, the inner service is never called.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    match evaluate_gate(state.sessions.as_ref(), request.headers()).await {
        GateDecision::Allow(session) => {
            request.extensions_mut().insert(session);
            next.run(request).await
        }
        GateDecision::Redirect(location) => {
            tracing::debug!(path = %request.uri().path(), "No session, redirecting to login");
            Redirect::temporary(location).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Fixed(Option<Session>);

    #[async_trait]
    impl SessionLookup for Fixed {
        async fn get_session(&self, _headers: &HeaderMap) -> Option<Session> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn missing_session_redirects_to_login() {
        let decision = evaluate_gate(&Fixed(None), &HeaderMap::new()).await;
        assert_eq!(decision, GateDecision::Redirect(LOGIN_PATH));
    }

    #[tokio::test]
    async fn valid_session_is_allowed() {
        let session = Session {
            email: "admin@example.com".into(),
            role: "admin".into(),
            expires_at: 0,
        };
        let decision = evaluate_gate(&Fixed(Some(session.clone())), &HeaderMap::new()).await;
        assert_eq!(decision, GateDecision::Allow(session));
    }
}
