//! Core competencies, shown in a fixed display order.

use bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use showcase_core::content::CORE_COMPETENCY;
use showcase_core::schema::Schema;
use showcase_core::types::Timestamp;

use super::{Entity, NewEntity};
use crate::serde_ext::{object_id_hex, timestamp};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreCompetency {
    #[serde(rename = "_id", with = "object_id_hex")]
    pub id: ObjectId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub order: i64,
    #[serde(with = "timestamp")]
    pub created_at: Timestamp,
    #[serde(with = "timestamp")]
    pub updated_at: Timestamp,
}

impl Entity for CoreCompetency {
    const COLLECTION: &'static str = "corecompetencies";
    const NAME: &'static str = "Core competency";

    fn sort() -> Document {
        doc! { "order": 1, "createdAt": 1 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCoreCompetency {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub order: i64,
}

impl NewEntity for CreateCoreCompetency {
    type Entity = CoreCompetency;

    fn schema() -> &'static Schema {
        &CORE_COMPETENCY
    }
}
