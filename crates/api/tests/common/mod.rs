#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use showcase_api::assets::{AssetError, AssetProvider, CloudinaryConfig};
use showcase_api::auth::password::hash_password;
use showcase_api::auth::session::{SessionConfig, SessionManager};
use showcase_api::config::{AdminCredentials, ServerConfig};
use showcase_api::router::build_app_router;
use showcase_api::state::AppState;
use showcase_db::{Database, DatabaseConfig, MEMORY_URI};

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "correct-horse-battery-staple";
pub const SESSION_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";
pub const API_KEY: &str = "test-api-key";
pub const API_SECRET: &str = "test-api-secret";
pub const CLOUD_NAME: &str = "demo-cloud";

/// Argon2 hashing is slow; hash the admin password once per test binary.
fn admin_password_hash() -> String {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| hash_password(ADMIN_PASSWORD).expect("hashing should succeed"))
        .clone()
}

/// Build a test `ServerConfig` backed by a fresh in-memory store.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database: DatabaseConfig {
            uri: Some(MEMORY_URI.to_string()),
            name: "showcase_test".to_string(),
        },
        session: SessionConfig {
            secret: SESSION_SECRET.to_string(),
            ttl_hours: 1,
            secure_cookie: false,
        },
        admin: AdminCredentials {
            email: Some(ADMIN_EMAIL.to_string()),
            password_hash: Some(admin_password_hash()),
        },
        cloudinary: CloudinaryConfig {
            cloud_name: Some(CLOUD_NAME.to_string()),
            api_key: Some(API_KEY.to_string()),
            api_secret: Some(API_SECRET.to_string()),
            api_base: "http://127.0.0.1:9".to_string(),
        },
        public_site_url: None,
        dashboard_dir: PathBuf::from("./does-not-exist"),
    }
}

/// Asset provider that records deletes instead of calling out.
#[derive(Default)]
pub struct StubAssets {
    pub fail: bool,
    pub destroyed: Mutex<Vec<String>>,
}

#[async_trait]
impl AssetProvider for StubAssets {
    async fn destroy(&self, public_id: &str) -> Result<Value, AssetError> {
        if self.fail {
            return Err(AssetError::Api {
                status: 401,
                body: "Invalid Signature".to_string(),
            });
        }
        self.destroyed
            .lock()
            .expect("lock poisoned")
            .push(public_id.to_string());
        Ok(json!({ "result": "ok" }))
    }
}

/// Build the full application router with the default test config.
pub fn build_test_app() -> Router {
    build_test_app_with(test_config(), Arc::new(StubAssets::default()))
}

/// Build the full application router with all middleware layers.
///
/// Uses the same [`build_app_router`] as `main.rs` so integration tests
/// exercise the production middleware stack.
pub fn build_test_app_with(config: ServerConfig, assets: Arc<dyn AssetProvider>) -> Router {
    let state = AppState {
        db: Arc::new(Database::new(config.database.clone())),
        config: Arc::new(config.clone()),
        sessions: Arc::new(SessionManager::new(config.session.clone())),
        assets,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("router is infallible")
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// The `Set-Cookie` header of a response.
pub fn set_cookie(response: &Response) -> String {
    response
        .headers()
        .get(SET_COOKIE)
        .expect("response should set a cookie")
        .to_str()
        .unwrap()
        .to_string()
}

/// Sign in as the test admin and return the `name=value` cookie pair.
pub async fn login_cookie(app: Router) -> String {
    let response = post_json(
        app,
        "/api/auth/login",
        json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    set_cookie(&response)
        .split(';')
        .next()
        .unwrap()
        .to_string()
}
