//! Admin routes used by the dashboard.
//!
//! These routes do not check the session themselves; only the dashboard
//! pages sit behind the gate.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{about, auth, blog, cloudinary, contact, home};
use crate::state::AppState;

/// Admin routes mounted at `/api/admin`.
///
/// ```text
/// GET|POST /hero, /services, /digital-solutions, /testimonials, /brands,
///          /cta, /gallery, /social-links, /faqs, /core-expertise,
///          /core-competencies, /journey-highlights, /professional-journey,
///          /blogs
/// GET      /blogs/slug/{slug}        -> blog::get_by_slug
/// GET|POST /contact/info             -> contact info
/// GET      /contact/messages         -> contact::list_messages
/// POST     /logout                   -> auth::logout
/// GET|POST /cloudinary/signature     -> cloudinary::signature
/// POST     /cloudinary/delete        -> cloudinary::delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        // Homepage sections
        .route("/hero", get(home::list_heroes).post(home::create_hero))
        .route("/services", get(home::list_services).post(home::create_service))
        .route(
            "/digital-solutions",
            get(home::list_digital_solutions).post(home::create_digital_solution),
        )
        .route(
            "/testimonials",
            get(home::list_testimonials).post(home::create_testimonial),
        )
        .route("/brands", get(home::list_brands).post(home::create_brand))
        .route("/cta", get(home::list_ctas).post(home::create_cta))
        .route(
            "/gallery",
            get(home::list_gallery).post(home::create_gallery_item),
        )
        .route(
            "/social-links",
            get(home::list_social_links).post(home::create_social_link),
        )
        // Contact
        .route("/faqs", get(contact::list_faqs).post(contact::create_faq))
        .route(
            "/contact/info",
            get(contact::get_contact_info).post(contact::create_contact_info),
        )
        .route("/contact/messages", get(contact::list_messages))
        // About
        .route(
            "/core-expertise",
            get(about::list_core_expertise).post(about::create_core_expertise),
        )
        .route(
            "/core-competencies",
            get(about::list_core_competencies).post(about::create_core_competency),
        )
        .route(
            "/journey-highlights",
            get(about::list_journey_highlights).post(about::create_journey_highlight),
        )
        .route(
            "/professional-journey",
            get(about::list_professional_journey).post(about::create_professional_journey),
        )
        // Blog
        .route("/blogs", get(blog::list_all).post(blog::create_blog))
        .route("/blogs/slug/{slug}", get(blog::get_by_slug))
        // Session and assets
        .route("/logout", post(auth::logout))
        .route(
            "/cloudinary/signature",
            get(cloudinary::signature).post(cloudinary::signature),
        )
        .route("/cloudinary/delete", post(cloudinary::delete))
}
