//! Cookie-carried admin sessions.
//!
//! A session is an HS256-signed JWT stored in the `showcase_session` cookie.
//! Nothing is kept server-side: logging out only clears the cookie.

use async_trait::async_trait;
use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "showcase_session";

/// Role carried by admin sessions.
pub const ADMIN_ROLE: &str = "admin";

const DEFAULT_TTL_HOURS: i64 = 24;

/// JWT claims embedded in the session cookie.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the admin's email address.
    pub sub: String,
    pub role: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4).
    pub jti: String,
}

/// An authenticated admin session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub email: String,
    pub role: String,
    #[serde(skip)]
    pub expires_at: i64,
}

impl From<Claims> for Session {
    fn from(claims: Claims) -> Self {
        Self {
            email: claims.sub,
            role: claims.role,
            expires_at: claims.exp,
        }
    }
}

/// Session signing and cookie settings.
#[derive(Clone)]
pub struct SessionConfig {
    /// HMAC-SHA256 secret used to sign and verify session tokens.
    pub secret: String,
    pub ttl_hours: i64,
    /// Add `Secure` to the cookie (HTTPS deployments).
    pub secure_cookie: bool,
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &"<redacted>")
            .field("ttl_hours", &self.ttl_hours)
            .field("secure_cookie", &self.secure_cookie)
            .finish()
    }
}

impl SessionConfig {
    /// Load session configuration from environment variables.
    ///
    /// | Env Var                 | Required | Default |
    /// |-------------------------|----------|---------|
    /// | `SESSION_SECRET`        | **yes**  | --      |
    /// | `SESSION_TTL_HOURS`     | no       | `24`    |
    /// | `SESSION_COOKIE_SECURE` | no       | `false` |
    ///
    /// # Panics
    ///
    /// Panics if `SESSION_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("SESSION_SECRET").expect("SESSION_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "SESSION_SECRET must not be empty");

        let ttl_hours: i64 = std::env::var("SESSION_TTL_HOURS")
            .unwrap_or_else(|_| DEFAULT_TTL_HOURS.to_string())
            .parse()
            .expect("SESSION_TTL_HOURS must be a valid i64");

        let secure_cookie = std::env::var("SESSION_COOKIE_SECURE")
            .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            secret,
            ttl_hours,
            secure_cookie,
        }
    }
}

/// Resolves the session, if any, that a request carries.
#[async_trait]
pub trait SessionLookup: Send + Sync {
    async fn get_session(&self, headers: &HeaderMap) -> Option<Session>;
}

/// Issues and verifies session cookies.
pub struct SessionManager {
    config: SessionConfig,
}

impl SessionManager {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    /// Sign a session token for `email`.
    pub fn issue(&self, email: &str, role: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: email.to_string(),
            role: role.to_string(),
            exp: now + self.config.ttl_hours * 3600,
            iat: now,
            jti: Uuid::new_v4().to_string(),
        };

        encode(
            &Header::default(), // HS256
            &claims,
            &EncodingKey::from_secret(self.config.secret.as_bytes()),
        )
    }

    /// Validate a token's signature and expiry.
    pub fn validate(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(data.claims)
    }

    /// `Set-Cookie` value carrying `token`.
    pub fn session_cookie(&self, token: &str) -> String {
        self.cookie(token, self.config.ttl_hours * 3600)
    }

    /// `Set-Cookie` value that removes the session cookie.
    pub fn clear_cookie(&self) -> String {
        self.cookie("", 0)
    }

    fn cookie(&self, value: &str, max_age: i64) -> String {
        let mut cookie =
            format!("{SESSION_COOKIE}={value}; HttpOnly; SameSite=Lax; Path=/; Max-Age={max_age}");
        if self.config.secure_cookie {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

#[async_trait]
impl SessionLookup for SessionManager {
    async fn get_session(&self, headers: &HeaderMap) -> Option<Session> {
        let token = cookie_value(headers, SESSION_COOKIE)?;
        match self.validate(token) {
            Ok(claims) => Some(claims.into()),
            Err(e) => {
                tracing::debug!(error = %e, "Rejected session cookie");
                None
            }
        }
    }
}

/// Find a cookie by name across every `Cookie` header.
pub fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn manager() -> SessionManager {
        SessionManager::new(SessionConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".into(),
            ttl_hours: 1,
            secure_cookie: false,
        })
    }

    fn headers_with_cookie(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn issue_and_validate() {
        let manager = manager();
        let token = manager.issue("admin@example.com", ADMIN_ROLE).unwrap();
        let claims = manager.validate(&token).unwrap();
        assert_eq!(claims.sub, "admin@example.com");
        assert_eq!(claims.role, ADMIN_ROLE);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn expired_token_fails() {
        let manager = manager();
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: "admin@example.com".into(),
            role: ADMIN_ROLE.into(),
            exp: now - 300,
            iat: now - 600,
            jti: Uuid::new_v4().to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret-that-is-long-enough-for-hmac"),
        )
        .unwrap();
        assert!(manager.validate(&token).is_err());
    }

    #[test]
    fn finds_cookie_among_others() {
        let headers = headers_with_cookie("theme=dark; showcase_session=abc.def; lang=en");
        assert_eq!(cookie_value(&headers, SESSION_COOKIE), Some("abc.def"));
        assert_eq!(cookie_value(&headers, "missing"), None);
    }

    #[test]
    fn cookie_attributes() {
        let manager = manager();
        assert_eq!(
            manager.session_cookie("tok"),
            "showcase_session=tok; HttpOnly; SameSite=Lax; Path=/; Max-Age=3600"
        );
        assert!(manager.clear_cookie().contains("Max-Age=0"));
    }

    #[tokio::test]
    async fn lookup_resolves_valid_cookie_only() {
        let manager = manager();
        let token = manager.issue("admin@example.com", ADMIN_ROLE).unwrap();

        let headers = headers_with_cookie(&format!("{SESSION_COOKIE}={token}"));
        let session = manager.get_session(&headers).await.unwrap();
        assert_eq!(session.email, "admin@example.com");

        let forged = headers_with_cookie(&format!("{SESSION_COOKIE}={token}x"));
        assert!(manager.get_session(&forged).await.is_none());
        assert!(manager.get_session(&HeaderMap::new()).await.is_none());
    }
}
