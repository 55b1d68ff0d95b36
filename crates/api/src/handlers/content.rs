//! The list and create shapes shared by every content handler.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use showcase_db::models::{Entity, NewEntity};
use showcase_db::repositories::ContentRepo;

use crate::error::{AppError, AppResult, ResourcePolicy};
use crate::response::DataResponse;
use crate::state::AppState;

/// A JSON request body, or the reason it could not be read.
pub type JsonBody = Result<Json<Value>, JsonRejection>;

/// Unwrap a [`JsonBody`], answering 400 when the body is not JSON.
pub fn json_body(payload: JsonBody) -> AppResult<Value> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Every document of `E` in its fixed order.
pub async fn list<E: Entity>(state: &AppState, policy: &ResourcePolicy) -> AppResult<Vec<E>> {
    let store = state.db.connect().await.map_err(|e| policy.fetch_error(e))?;
    ContentRepo::list(store.as_ref())
        .await
        .map_err(|e| policy.fetch_error(e))
}

/// The newest document of `E`, if any.
pub async fn latest<E: Entity>(state: &AppState, policy: &ResourcePolicy) -> AppResult<Option<E>> {
    let store = state.db.connect().await.map_err(|e| policy.fetch_error(e))?;
    ContentRepo::latest(store.as_ref())
        .await
        .map_err(|e| policy.fetch_error(e))
}

/// Validate a payload, insert it and answer 201 `{ success, data }`.
pub async fn create<D: NewEntity>(
    state: &AppState,
    policy: &ResourcePolicy,
    payload: JsonBody,
) -> AppResult<(StatusCode, Json<DataResponse<D::Entity>>)> {
    let payload = json_body(payload)?;
    let dto = D::from_payload(payload).map_err(|e| policy.create_error(e))?;

    let store = state.db.connect().await.map_err(|e| policy.create_error(e))?;
    let created = ContentRepo::create(store.as_ref(), &dto)
        .await
        .map_err(|e| policy.create_error(e))?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(created))))
}
