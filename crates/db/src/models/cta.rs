//! Call-to-action blocks.

use bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use showcase_core::content::CTA;
use showcase_core::schema::Schema;
use showcase_core::types::Timestamp;

use super::{Entity, NewEntity};
use crate::serde_ext::{object_id_hex, timestamp};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cta {
    #[serde(rename = "_id", with = "object_id_hex")]
    pub id: ObjectId,
    pub title: String,
    pub description: String,
    pub button_text: String,
    pub button_link: String,
    #[serde(with = "timestamp")]
    pub created_at: Timestamp,
    #[serde(with = "timestamp")]
    pub updated_at: Timestamp,
}

impl Entity for Cta {
    const COLLECTION: &'static str = "ctas";
    const NAME: &'static str = "CTA";

    fn sort() -> Document {
        doc! { "createdAt": -1 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCta {
    pub title: String,
    pub description: String,
    pub button_text: String,
    pub button_link: String,
}

impl NewEntity for CreateCta {
    type Entity = Cta;

    fn schema() -> &'static Schema {
        &CTA
    }
}
