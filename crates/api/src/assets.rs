//! Client for the hosted image provider (Cloudinary).
//!
//! Uploads go straight from the browser to the provider using a signature
//! computed by [`showcase_core::signing`]; the server only ever deletes.

use async_trait::async_trait;
use showcase_core::signing::sign_params;

use crate::config::optional_env;

const DEFAULT_API_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Asset provider credentials.
#[derive(Clone, Default)]
pub struct CloudinaryConfig {
    pub cloud_name: Option<String>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    /// Base URL of the REST API (default: `https://api.cloudinary.com/v1_1`).
    pub api_base: String,
}

impl std::fmt::Debug for CloudinaryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudinaryConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &self.api_secret.as_ref().map(|_| "<redacted>"))
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl CloudinaryConfig {
    /// Load provider settings from environment variables.
    ///
    /// | Env Var                 | Default                            |
    /// |-------------------------|------------------------------------|
    /// | `CLOUDINARY_CLOUD_NAME` | unset                              |
    /// | `CLOUDINARY_API_KEY`    | unset                              |
    /// | `CLOUDINARY_API_SECRET` | unset                              |
    /// | `CLOUDINARY_API_BASE`   | `https://api.cloudinary.com/v1_1`  |
    ///
    /// Missing credentials are only reported when a request needs them.
    pub fn from_env() -> Self {
        Self {
            cloud_name: optional_env("CLOUDINARY_CLOUD_NAME"),
            api_key: optional_env("CLOUDINARY_API_KEY"),
            api_secret: optional_env("CLOUDINARY_API_SECRET"),
            api_base: optional_env("CLOUDINARY_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        }
    }

    /// The `(api_key, api_secret)` pair needed for signing.
    pub fn signing_credentials(&self) -> Option<(&str, &str)> {
        Some((self.api_key.as_deref()?, self.api_secret.as_deref()?))
    }
}

/// Errors from the asset provider layer.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// Credentials are missing; no request was sent.
    #[error("Cloudinary is not configured: {0}")]
    Configuration(&'static str),

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("Cloudinary request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Cloudinary API error ({status}): {body}")]
    Api { status: u16, body: String },
}

/// Operations the server performs against the hosted asset store.
#[async_trait]
pub trait AssetProvider: Send + Sync {
    /// Delete an uploaded image, returning the provider's result object.
    async fn destroy(&self, public_id: &str) -> Result<serde_json::Value, AssetError>;
}

/// HTTP client for the Cloudinary upload API.
pub struct CloudinaryClient {
    client: reqwest::Client,
    config: CloudinaryConfig,
}

impl CloudinaryClient {
    pub fn new(config: CloudinaryConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Ensure the response has a success status code, capturing the body
    /// otherwise.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, AssetError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(AssetError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl AssetProvider for CloudinaryClient {
    async fn destroy(&self, public_id: &str) -> Result<serde_json::Value, AssetError> {
        let cloud_name = self
            .config
            .cloud_name
            .as_deref()
            .ok_or(AssetError::Configuration("CLOUDINARY_CLOUD_NAME is not set"))?;
        let (api_key, api_secret) = self.config.signing_credentials().ok_or(
            AssetError::Configuration("CLOUDINARY_API_KEY and CLOUDINARY_API_SECRET must be set"),
        )?;

        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = sign_params(
            &[("public_id", public_id), ("timestamp", timestamp.as_str())],
            api_secret,
        );

        let url = format!(
            "{}/{cloud_name}/image/destroy",
            self.config.api_base.trim_end_matches('/')
        );
        tracing::info!(public_id, "Deleting asset");

        let response = self
            .client
            .post(url)
            .form(&[
                ("public_id", public_id),
                ("timestamp", timestamp.as_str()),
                ("api_key", api_key),
                ("signature", signature.as_str()),
            ])
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json::<serde_json::Value>().await?)
    }
}
