//! Handlers for signed uploads and deletes against the asset provider.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use showcase_core::error::CoreError;
use showcase_core::signing::upload_signature;

use super::content::{json_body, JsonBody};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Parameters the browser needs for a direct signed upload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureResponse {
    pub signature: String,
    pub timestamp: i64,
    pub api_key: String,
    pub cloud_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub result: Value,
}

/// POST /api/admin/cloudinary/signature
///
/// `signature = SHA1("timestamp=<unix seconds>" + api_secret)`.
pub async fn signature(State(state): State<AppState>) -> AppResult<Json<SignatureResponse>> {
    let cloudinary = &state.config.cloudinary;
    let (api_key, api_secret) = cloudinary.signing_credentials().ok_or_else(|| {
        AppError::Core(CoreError::Configuration(
            "Cloudinary API key and secret are not configured".into(),
        ))
    })?;

    let timestamp = chrono::Utc::now().timestamp();

    Ok(Json(SignatureResponse {
        signature: upload_signature(timestamp, api_secret),
        timestamp,
        api_key: api_key.to_string(),
        cloud_name: cloudinary.cloud_name.clone(),
    }))
}

/// POST /api/admin/cloudinary/delete -- body `{ "publicId": "..." }`.
pub async fn delete(
    State(state): State<AppState>,
    payload: JsonBody,
) -> AppResult<Json<DeleteResponse>> {
    let payload = json_body(payload)?;
    let public_id = payload
        .get("publicId")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("Public ID is required".into()))?;

    let result = state.assets.destroy(public_id).await?;

    Ok(Json(DeleteResponse {
        success: true,
        result,
    }))
}
