use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use showcase_core::error::CoreError;
use showcase_db::DbError;

use crate::assets::AssetError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{ "success": false, "error" }`
/// envelope for every failure.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `showcase_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A document store error.
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    /// The hosted asset provider failed or is not configured.
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A failure already resolved to a status and a client-facing message.
    #[error("{message}")]
    Status { status: StatusCode, message: String },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound(_) => (StatusCode::NOT_FOUND, core.to_string()),
                CoreError::Validation(msg) | CoreError::Conflict(msg) => {
                    (StatusCode::BAD_REQUEST, msg)
                }
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
                CoreError::Configuration(msg) => {
                    tracing::error!(error = %msg, "Configuration error");
                    (StatusCode::INTERNAL_SERVER_ERROR, msg)
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Store errors ---
            AppError::Database(DbError::DuplicateKey { key, .. }) => (
                StatusCode::BAD_REQUEST,
                format!("A document with this {key} already exists"),
            ),
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }

            // --- Asset provider ---
            AppError::Asset(err) => {
                tracing::error!(error = %err, "Asset provider error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Status { status, message } => (status, message),
        };

        let body = json!({
            "success": false,
            "error": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// How one resource reports its failures.
///
/// Store failures become a fixed `Failed to fetch <plural>` /
/// `Failed to create <singular>` message; validation failures echo the
/// validation summary with the resource's validation status.
#[derive(Debug, Clone, Copy)]
pub struct ResourcePolicy {
    pub singular: &'static str,
    pub plural: &'static str,
    pub validation_status: StatusCode,
}

impl ResourcePolicy {
    /// A resource that answers validation failures with 400.
    pub const fn new(singular: &'static str, plural: &'static str) -> Self {
        Self {
            singular,
            plural,
            validation_status: StatusCode::BAD_REQUEST,
        }
    }

    /// Answer validation failures with 500 instead.
    pub const fn validation_as_server_error(mut self) -> Self {
        self.validation_status = StatusCode::INTERNAL_SERVER_ERROR;
        self
    }

    /// Map a failed read.
    pub fn fetch_error(&self, err: impl Into<AppError>) -> AppError {
        match err.into() {
            AppError::Database(err) => {
                tracing::error!(resource = self.plural, error = %err, "Fetch failed");
                AppError::Status {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: format!("Failed to fetch {}", self.plural),
                }
            }
            other => other,
        }
    }

    /// Map a failed create.
    pub fn create_error(&self, err: impl Into<AppError>) -> AppError {
        match err.into() {
            AppError::Core(CoreError::Validation(message)) => AppError::Status {
                status: self.validation_status,
                message,
            },
            AppError::Database(DbError::DuplicateKey { key, .. }) => AppError::Status {
                status: StatusCode::BAD_REQUEST,
                message: format!("A {} with this {key} already exists", self.singular),
            },
            AppError::Database(err) => {
                tracing::error!(resource = self.singular, error = %err, "Create failed");
                AppError::Status {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: format!("Failed to create {}", self.singular),
                }
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRICT: ResourcePolicy = ResourcePolicy::new("gallery item", "gallery items");
    const LENIENT: ResourcePolicy =
        ResourcePolicy::new("hero", "hero content").validation_as_server_error();

    fn status_and_message(err: AppError) -> (StatusCode, String) {
        match err {
            AppError::Status { status, message } => (status, message),
            other => panic!("expected a resolved status, got {other:?}"),
        }
    }

    #[test]
    fn validation_status_follows_policy() {
        let err = CoreError::Validation("Gallery validation failed: title: title is required".into());
        let (status, message) = status_and_message(STRICT.create_error(err));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(message.contains("title is required"));

        let err = CoreError::Validation("Hero validation failed".into());
        let (status, _) = status_and_message(LENIENT.create_error(err));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn store_failures_use_fixed_messages() {
        let (status, message) = status_and_message(STRICT.fetch_error(DbError::MissingUri));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "Failed to fetch gallery items");

        let (_, message) = status_and_message(LENIENT.create_error(DbError::Connection(
            "connection refused".into(),
        )));
        assert_eq!(message, "Failed to create hero");
    }

    #[test]
    fn duplicate_keys_are_client_errors() {
        let err = DbError::DuplicateKey {
            collection: "blogs".into(),
            key: "slug".into(),
        };
        let (status, message) = status_and_message(ResourcePolicy::new("blog", "blogs").create_error(err));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "A blog with this slug already exists");
    }
}
