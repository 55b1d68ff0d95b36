//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - An entity struct deserialized from the stored BSON document and
//!   serialized as the JSON the API returns
//! - A create DTO deserialized from the normalized, schema-checked payload
//!   and serialized into the document that gets inserted

pub mod blog;
pub mod brand;
pub mod contact_info;
pub mod core_competency;
pub mod core_expertise;
pub mod cta;
pub mod digital_solution;
pub mod faq;
pub mod gallery;
pub mod hero;
pub mod journey_highlight;
pub mod message;
pub mod professional_journey;
pub mod service;
pub mod social_link;
pub mod testimonial;

use bson::Document;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use showcase_core::error::CoreError;
use showcase_core::schema::{validate_payload, Schema};

use crate::error::DbError;
use crate::store::IndexSpec;

/// A stored content document.
pub trait Entity: DeserializeOwned + Serialize + Send + Sync + 'static {
    /// Collection the documents live in.
    const COLLECTION: &'static str;
    /// Display name used in not-found messages.
    const NAME: &'static str;

    /// Fixed list order.
    fn sort() -> Document;

    fn indexes() -> Vec<IndexSpec> {
        Vec::new()
    }
}

/// A create payload for an [`Entity`].
pub trait NewEntity: DeserializeOwned + Serialize + Send + Sync {
    type Entity: Entity;

    fn schema() -> &'static Schema;

    /// Adjust the raw payload before schema evaluation.
    fn prepare(payload: Value) -> Value {
        payload
    }

    /// Normalize, validate and deserialize a raw JSON payload.
    fn from_payload(payload: Value) -> Result<Self, CoreError> {
        let schema = Self::schema();
        let data = validate_payload(schema, Self::prepare(payload))?;
        serde_json::from_value(Value::Object(data)).map_err(|e| {
            CoreError::Validation(format!("{} validation failed: {e}", schema.entity))
        })
    }

    /// The document to insert, without `_id` or timestamps.
    fn to_document(&self) -> Result<Document, DbError> {
        Ok(bson::to_document(self)?)
    }

    /// The `(image, publicId)` pair whose halves should travel together.
    fn image_pair(&self) -> Option<(Option<&str>, Option<&str>)> {
        None
    }
}

/// Every collection with the indexes it declares.
pub fn index_plan() -> Vec<(&'static str, Vec<IndexSpec>)> {
    vec![
        (blog::Blog::COLLECTION, blog::Blog::indexes()),
        (
            journey_highlight::JourneyHighlight::COLLECTION,
            journey_highlight::JourneyHighlight::indexes(),
        ),
        (gallery::GalleryItem::COLLECTION, gallery::GalleryItem::indexes()),
        (
            professional_journey::ProfessionalJourney::COLLECTION,
            professional_journey::ProfessionalJourney::indexes(),
        ),
    ]
}
