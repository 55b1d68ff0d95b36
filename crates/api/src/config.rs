use std::path::PathBuf;

use showcase_db::DatabaseConfig;

use crate::assets::CloudinaryConfig;
use crate::auth::session::SessionConfig;

/// Default CORS origin when neither `CORS_ORIGINS` nor `PUBLIC_SITE_URL` is set.
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Server configuration loaded from environment variables.
///
/// All fields except the session secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Document store location. The connection itself is opened lazily.
    pub database: DatabaseConfig,
    /// Session cookie signing and lifetime.
    pub session: SessionConfig,
    /// The single admin account allowed to sign in.
    pub admin: AdminCredentials,
    /// Hosted asset provider credentials.
    pub cloudinary: CloudinaryConfig,
    /// Base URL of the public site.
    pub public_site_url: Option<String>,
    /// Static dashboard files served behind the session gate.
    pub dashboard_dir: PathBuf,
}

/// Admin sign-in credentials. Either half missing disables login.
#[derive(Clone, Default)]
pub struct AdminCredentials {
    pub email: Option<String>,
    /// Argon2id PHC string.
    pub password_hash: Option<String>,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password_hash", &self.password_hash.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                   |
    /// |------------------------|-------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                 |
    /// | `PORT`                 | `3000`                                    |
    /// | `CORS_ORIGINS`         | `PUBLIC_SITE_URL`, else `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                      |
    /// | `MONGODB_URI`          | unset                                     |
    /// | `MONGODB_DB`           | `showcase`                                |
    /// | `ADMIN_EMAIL`          | unset                                     |
    /// | `ADMIN_PASSWORD_HASH`  | unset                                     |
    /// | `PUBLIC_SITE_URL`      | unset                                     |
    /// | `DASHBOARD_DIR`        | `./public`                                |
    ///
    /// Session and asset provider variables are read by
    /// [`SessionConfig::from_env`] and [`CloudinaryConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let public_site_url = optional_env("PUBLIC_SITE_URL");

        let cors_origins: Vec<String> = optional_env("CORS_ORIGINS")
            .or_else(|| public_site_url.clone())
            .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.into())
            .split(',')
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database = DatabaseConfig {
            uri: optional_env("MONGODB_URI"),
            name: optional_env("MONGODB_DB").unwrap_or_else(|| "showcase".into()),
        };

        let admin = AdminCredentials {
            email: optional_env("ADMIN_EMAIL"),
            password_hash: optional_env("ADMIN_PASSWORD_HASH"),
        };

        let dashboard_dir = optional_env("DASHBOARD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./public"));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database,
            session: SessionConfig::from_env(),
            admin,
            cloudinary: CloudinaryConfig::from_env(),
            public_site_url,
            dashboard_dir,
        }
    }
}

/// Read an env var, treating empty or whitespace-only values as unset.
pub fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
