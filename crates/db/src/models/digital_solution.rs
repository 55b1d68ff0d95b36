//! Digital solutions. Same shape as services, separate collection.

use bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use showcase_core::content::DIGITAL_SOLUTION;
use showcase_core::schema::Schema;
use showcase_core::types::Timestamp;

use super::{Entity, NewEntity};
use crate::serde_ext::{object_id_hex, timestamp};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitalSolution {
    #[serde(rename = "_id", with = "object_id_hex")]
    pub id: ObjectId,
    pub icon: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_public_id: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: Timestamp,
    #[serde(with = "timestamp")]
    pub updated_at: Timestamp,
}

impl Entity for DigitalSolution {
    const COLLECTION: &'static str = "digitalsolutions";
    const NAME: &'static str = "Digital solution";

    fn sort() -> Document {
        doc! { "createdAt": -1 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDigitalSolution {
    pub icon: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_public_id: Option<String>,
}

impl NewEntity for CreateDigitalSolution {
    type Entity = DigitalSolution;

    fn schema() -> &'static Schema {
        &DIGITAL_SOLUTION
    }

    fn image_pair(&self) -> Option<(Option<&str>, Option<&str>)> {
        Some((self.image.as_deref(), self.image_public_id.as_deref()))
    }
}
