//! Handlers for the about page: expertise, competencies and the journey.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use showcase_db::models::core_competency::{CoreCompetency, CreateCoreCompetency};
use showcase_db::models::core_expertise::{CoreExpertise, CreateCoreExpertise};
use showcase_db::models::journey_highlight::{CreateJourneyHighlight, JourneyHighlight};
use showcase_db::models::professional_journey::{
    CreateProfessionalJourney, ProfessionalJourney,
};

use super::content::{self, JsonBody};
use crate::error::{AppResult, ResourcePolicy};
use crate::response::DataResponse;
use crate::state::AppState;

const CORE_EXPERTISE: ResourcePolicy =
    ResourcePolicy::new("core expertise", "core expertise").validation_as_server_error();
const CORE_COMPETENCY: ResourcePolicy =
    ResourcePolicy::new("core competency", "core competencies").validation_as_server_error();
const JOURNEY_HIGHLIGHT: ResourcePolicy =
    ResourcePolicy::new("journey highlight", "journey highlights");
const PROFESSIONAL_JOURNEY: ResourcePolicy =
    ResourcePolicy::new("professional journey entry", "professional journey")
        .validation_as_server_error();

/// GET /api/core-expertise
pub async fn list_core_expertise(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<CoreExpertise>>>> {
    let items = content::list(&state, &CORE_EXPERTISE).await?;
    Ok(Json(DataResponse::new(items)))
}

/// POST /api/admin/core-expertise
pub async fn create_core_expertise(
    State(state): State<AppState>,
    payload: JsonBody,
) -> AppResult<(StatusCode, Json<DataResponse<CoreExpertise>>)> {
    content::create::<CreateCoreExpertise>(&state, &CORE_EXPERTISE, payload).await
}

/// GET /api/core-competencies
pub async fn list_core_competencies(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<CoreCompetency>>>> {
    let items = content::list(&state, &CORE_COMPETENCY).await?;
    Ok(Json(DataResponse::new(items)))
}

/// POST /api/admin/core-competencies
pub async fn create_core_competency(
    State(state): State<AppState>,
    payload: JsonBody,
) -> AppResult<(StatusCode, Json<DataResponse<CoreCompetency>>)> {
    content::create::<CreateCoreCompetency>(&state, &CORE_COMPETENCY, payload).await
}

/// GET /api/journey-highlights -- bare array ordered by `id`.
pub async fn list_journey_highlights(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<JourneyHighlight>>> {
    Ok(Json(content::list(&state, &JOURNEY_HIGHLIGHT).await?))
}

/// POST /api/admin/journey-highlights
pub async fn create_journey_highlight(
    State(state): State<AppState>,
    payload: JsonBody,
) -> AppResult<(StatusCode, Json<DataResponse<JourneyHighlight>>)> {
    content::create::<CreateJourneyHighlight>(&state, &JOURNEY_HIGHLIGHT, payload).await
}

/// GET /api/professional-journey
pub async fn list_professional_journey(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ProfessionalJourney>>>> {
    let entries = content::list(&state, &PROFESSIONAL_JOURNEY).await?;
    Ok(Json(DataResponse::new(entries)))
}

/// POST /api/admin/professional-journey
pub async fn create_professional_journey(
    State(state): State<AppState>,
    payload: JsonBody,
) -> AppResult<(StatusCode, Json<DataResponse<ProfessionalJourney>>)> {
    content::create::<CreateProfessionalJourney>(&state, &PROFESSIONAL_JOURNEY, payload).await
}
