//! Client testimonials.

use bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use showcase_core::content::TESTIMONIAL;
use showcase_core::schema::Schema;
use showcase_core::types::Timestamp;

use super::{Entity, NewEntity};
use crate::serde_ext::{object_id_hex, timestamp};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(rename = "_id", with = "object_id_hex")]
    pub id: ObjectId,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub company: Option<String>,
    pub content: String,
    /// Star rating, 1 to 5.
    pub rating: i64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_public_id: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: Timestamp,
    #[serde(with = "timestamp")]
    pub updated_at: Timestamp,
}

impl Entity for Testimonial {
    const COLLECTION: &'static str = "testimonials";
    const NAME: &'static str = "Testimonial";

    fn sort() -> Document {
        doc! { "createdAt": -1 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestimonial {
    pub name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub content: String,
    pub rating: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_public_id: Option<String>,
}

impl NewEntity for CreateTestimonial {
    type Entity = Testimonial;

    fn schema() -> &'static Schema {
        &TESTIMONIAL
    }

    fn image_pair(&self) -> Option<(Option<&str>, Option<&str>)> {
        Some((self.image.as_deref(), self.image_public_id.as_deref()))
    }
}
