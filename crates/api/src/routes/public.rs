//! Read-only routes for the public site, plus the contact form.

use axum::routing::get;
use axum::Router;

use crate::handlers::{about, blog, contact, home};
use crate::state::AppState;

/// Public routes mounted at `/api`.
///
/// ```text
/// GET  /hero                  -> list_heroes
/// GET  /services              -> list_services
/// GET  /digital-solutions     -> list_digital_solutions
/// GET  /testimonials          -> list_testimonials
/// GET  /brands                -> list_brands
/// GET  /cta                   -> list_ctas
/// GET  /gallery               -> list_gallery
/// GET  /social-links          -> list_social_links
/// GET  /contact               -> get_contact_info
/// POST /contact               -> submit_message
/// GET  /faqs                  -> list_faqs
/// GET  /core-expertise        -> list_core_expertise
/// GET  /core-competencies     -> list_core_competencies
/// GET  /journey-highlights    -> list_journey_highlights
/// GET  /professional-journey  -> list_professional_journey
/// GET  /blogs                 -> list_published
/// GET  /blogs/{slug}          -> get_published
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/hero", get(home::list_heroes))
        .route("/services", get(home::list_services))
        .route("/digital-solutions", get(home::list_digital_solutions))
        .route("/testimonials", get(home::list_testimonials))
        .route("/brands", get(home::list_brands))
        .route("/cta", get(home::list_ctas))
        .route("/gallery", get(home::list_gallery))
        .route("/social-links", get(home::list_social_links))
        .route(
            "/contact",
            get(contact::get_contact_info).post(contact::submit_message),
        )
        .route("/faqs", get(contact::list_faqs))
        .route("/core-expertise", get(about::list_core_expertise))
        .route("/core-competencies", get(about::list_core_competencies))
        .route("/journey-highlights", get(about::list_journey_highlights))
        .route("/professional-journey", get(about::list_professional_journey))
        .route("/blogs", get(blog::list_published))
        .route("/blogs/{slug}", get(blog::get_published))
}
