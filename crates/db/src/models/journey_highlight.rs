//! Numbered highlights of the journey timeline.
//!
//! `id` here is the caller-chosen display number, unique per collection and
//! distinct from the document's `_id`.

use bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use showcase_core::content::JOURNEY_HIGHLIGHT;
use showcase_core::schema::Schema;
use showcase_core::types::Timestamp;

use super::{Entity, NewEntity};
use crate::serde_ext::{object_id_hex, timestamp};
use crate::store::IndexSpec;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyHighlight {
    #[serde(rename = "_id", with = "object_id_hex")]
    pub object_id: ObjectId,
    pub id: i64,
    pub period: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(with = "timestamp")]
    pub created_at: Timestamp,
    #[serde(with = "timestamp")]
    pub updated_at: Timestamp,
}

impl Entity for JourneyHighlight {
    const COLLECTION: &'static str = "journeyhighlights";
    const NAME: &'static str = "Journey highlight";

    fn sort() -> Document {
        doc! { "id": 1 }
    }

    fn indexes() -> Vec<IndexSpec> {
        vec![IndexSpec::unique("id_unique", doc! { "id": 1 })]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJourneyHighlight {
    pub id: i64,
    pub period: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NewEntity for CreateJourneyHighlight {
    type Entity = JourneyHighlight;

    fn schema() -> &'static Schema {
        &JOURNEY_HIGHLIGHT
    }
}
