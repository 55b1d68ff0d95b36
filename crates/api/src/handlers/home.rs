//! Handlers for the homepage sections: hero, services, digital solutions,
//! testimonials, brands, CTA, gallery and social links.
//!
//! Each list handler serves both the public route and its admin twin.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use showcase_db::models::brand::{Brand, CreateBrand};
use showcase_db::models::cta::{CreateCta, Cta};
use showcase_db::models::digital_solution::{CreateDigitalSolution, DigitalSolution};
use showcase_db::models::gallery::{CreateGalleryItem, GalleryItem};
use showcase_db::models::hero::{CreateHero, Hero};
use showcase_db::models::service::{CreateService, Service};
use showcase_db::models::social_link::{CreateSocialLink, SocialLink};
use showcase_db::models::testimonial::{CreateTestimonial, Testimonial};
use showcase_db::repositories::GalleryRepo;

use super::content::{self, JsonBody};
use crate::error::{AppError, AppResult, ResourcePolicy};
use crate::response::{CountedResponse, DataResponse, ServicesResponse};
use crate::state::AppState;

const HERO: ResourcePolicy =
    ResourcePolicy::new("hero", "hero content").validation_as_server_error();
const SERVICE: ResourcePolicy = ResourcePolicy::new("service", "services");
const DIGITAL_SOLUTION: ResourcePolicy =
    ResourcePolicy::new("digital solution", "digital solutions");
const TESTIMONIAL: ResourcePolicy =
    ResourcePolicy::new("testimonial", "testimonials").validation_as_server_error();
const BRAND: ResourcePolicy = ResourcePolicy::new("brand", "brands").validation_as_server_error();
const CTA: ResourcePolicy = ResourcePolicy::new("CTA", "CTA content").validation_as_server_error();
const GALLERY: ResourcePolicy = ResourcePolicy::new("gallery item", "gallery items");
const SOCIAL_LINK: ResourcePolicy = ResourcePolicy::new("social link", "social links");

type Created<T> = AppResult<(StatusCode, Json<DataResponse<T>>)>;

// ---------------------------------------------------------------------------
// Hero
// ---------------------------------------------------------------------------

/// GET /api/hero, GET /api/admin/hero
pub async fn list_heroes(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Hero>>>> {
    let heroes = content::list(&state, &HERO).await?;
    Ok(Json(DataResponse::new(heroes)))
}

/// POST /api/admin/hero
pub async fn create_hero(State(state): State<AppState>, payload: JsonBody) -> Created<Hero> {
    content::create::<CreateHero>(&state, &HERO, payload).await
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

/// GET /api/services -- `{ success, services, count }`.
pub async fn list_services(
    State(state): State<AppState>,
) -> AppResult<Json<ServicesResponse<Service>>> {
    let services = content::list(&state, &SERVICE).await?;
    Ok(Json(ServicesResponse::new(services)))
}

/// POST /api/admin/services
pub async fn create_service(State(state): State<AppState>, payload: JsonBody) -> Created<Service> {
    content::create::<CreateService>(&state, &SERVICE, payload).await
}

// ---------------------------------------------------------------------------
// Digital solutions
// ---------------------------------------------------------------------------

/// GET /api/digital-solutions -- `{ success, data, count }`.
pub async fn list_digital_solutions(
    State(state): State<AppState>,
) -> AppResult<Json<CountedResponse<DigitalSolution>>> {
    let solutions = content::list(&state, &DIGITAL_SOLUTION).await?;
    Ok(Json(CountedResponse::new(solutions)))
}

/// POST /api/admin/digital-solutions
pub async fn create_digital_solution(
    State(state): State<AppState>,
    payload: JsonBody,
) -> Created<DigitalSolution> {
    content::create::<CreateDigitalSolution>(&state, &DIGITAL_SOLUTION, payload).await
}

// ---------------------------------------------------------------------------
// Testimonials and brands (bare arrays)
// ---------------------------------------------------------------------------

/// GET /api/testimonials
pub async fn list_testimonials(State(state): State<AppState>) -> AppResult<Json<Vec<Testimonial>>> {
    Ok(Json(content::list(&state, &TESTIMONIAL).await?))
}

/// POST /api/admin/testimonials
pub async fn create_testimonial(
    State(state): State<AppState>,
    payload: JsonBody,
) -> Created<Testimonial> {
    content::create::<CreateTestimonial>(&state, &TESTIMONIAL, payload).await
}

/// GET /api/brands
pub async fn list_brands(State(state): State<AppState>) -> AppResult<Json<Vec<Brand>>> {
    Ok(Json(content::list(&state, &BRAND).await?))
}

/// POST /api/admin/brands
pub async fn create_brand(State(state): State<AppState>, payload: JsonBody) -> Created<Brand> {
    content::create::<CreateBrand>(&state, &BRAND, payload).await
}

// ---------------------------------------------------------------------------
// CTA
// ---------------------------------------------------------------------------

/// GET /api/cta
pub async fn list_ctas(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Cta>>>> {
    let ctas = content::list(&state, &CTA).await?;
    Ok(Json(DataResponse::new(ctas)))
}

/// POST /api/admin/cta
pub async fn create_cta(State(state): State<AppState>, payload: JsonBody) -> Created<Cta> {
    content::create::<CreateCta>(&state, &CTA, payload).await
}

// ---------------------------------------------------------------------------
// Gallery
// ---------------------------------------------------------------------------

/// Query parameters for `GET /api/gallery`.
#[derive(Debug, Deserialize)]
pub struct GalleryQuery {
    /// A category name, or `all` / absent for everything.
    pub category: Option<String>,
}

/// GET /api/gallery?category=
pub async fn list_gallery(
    State(state): State<AppState>,
    query: Result<Query<GalleryQuery>, QueryRejection>,
) -> AppResult<Json<DataResponse<Vec<GalleryItem>>>> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let store = state.db.connect().await.map_err(|e| GALLERY.fetch_error(e))?;
    let items = GalleryRepo::list_by_category(store.as_ref(), query.category.as_deref())
        .await
        .map_err(|e| GALLERY.fetch_error(e))?;
    Ok(Json(DataResponse::new(items)))
}

/// POST /api/admin/gallery
pub async fn create_gallery_item(
    State(state): State<AppState>,
    payload: JsonBody,
) -> Created<GalleryItem> {
    content::create::<CreateGalleryItem>(&state, &GALLERY, payload).await
}

// ---------------------------------------------------------------------------
// Social links
// ---------------------------------------------------------------------------

/// GET /api/social-links
pub async fn list_social_links(State(state): State<AppState>) -> AppResult<Json<Vec<SocialLink>>> {
    Ok(Json(content::list(&state, &SOCIAL_LINK).await?))
}

/// POST /api/admin/social-links
pub async fn create_social_link(
    State(state): State<AppState>,
    payload: JsonBody,
) -> Created<SocialLink> {
    content::create::<CreateSocialLink>(&state, &SOCIAL_LINK, payload).await
}
