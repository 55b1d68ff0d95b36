//! Handlers for contact info, contact-form messages and FAQs.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use showcase_db::models::contact_info::{ContactInfo, CreateContactInfo};
use showcase_db::models::faq::{CreateFaq, Faq};
use showcase_db::models::message::{CreateMessage, Message};

use super::content::{self, JsonBody};
use crate::error::{AppResult, ResourcePolicy};
use crate::response::DataResponse;
use crate::state::AppState;

const CONTACT_INFO: ResourcePolicy =
    ResourcePolicy::new("contact info", "contact info").validation_as_server_error();
const MESSAGE: ResourcePolicy = ResourcePolicy::new("message", "messages");
const FAQ: ResourcePolicy = ResourcePolicy::new("FAQ", "FAQs").validation_as_server_error();

/// GET /api/contact, GET /api/admin/contact/info
///
/// The most recently saved contact info, or `null` when none exists.
pub async fn get_contact_info(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Option<ContactInfo>>>> {
    let info = content::latest(&state, &CONTACT_INFO).await?;
    Ok(Json(DataResponse::new(info)))
}

/// POST /api/admin/contact/info
pub async fn create_contact_info(
    State(state): State<AppState>,
    payload: JsonBody,
) -> AppResult<(StatusCode, Json<DataResponse<ContactInfo>>)> {
    content::create::<CreateContactInfo>(&state, &CONTACT_INFO, payload).await
}

/// POST /api/contact -- submit the public contact form.
pub async fn submit_message(
    State(state): State<AppState>,
    payload: JsonBody,
) -> AppResult<(StatusCode, Json<DataResponse<Message>>)> {
    content::create::<CreateMessage>(&state, &MESSAGE, payload).await
}

/// GET /api/admin/contact/messages
pub async fn list_messages(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Message>>>> {
    let messages = content::list(&state, &MESSAGE).await?;
    Ok(Json(DataResponse::new(messages)))
}

/// GET /api/faqs, GET /api/admin/faqs
pub async fn list_faqs(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Faq>>>> {
    let faqs = content::list(&state, &FAQ).await?;
    Ok(Json(DataResponse::new(faqs)))
}

/// POST /api/admin/faqs
pub async fn create_faq(
    State(state): State<AppState>,
    payload: JsonBody,
) -> AppResult<(StatusCode, Json<DataResponse<Faq>>)> {
    content::create::<CreateFaq>(&state, &FAQ, payload).await
}
