//! Core expertise areas on the about page.

use bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use showcase_core::content::CORE_EXPERTISE;
use showcase_core::schema::Schema;
use showcase_core::types::Timestamp;

use super::{Entity, NewEntity};
use crate::serde_ext::{object_id_hex, timestamp};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreExpertise {
    #[serde(rename = "_id", with = "object_id_hex")]
    pub id: ObjectId,
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(with = "timestamp")]
    pub created_at: Timestamp,
    #[serde(with = "timestamp")]
    pub updated_at: Timestamp,
}

impl Entity for CoreExpertise {
    const COLLECTION: &'static str = "coreexpertises";
    const NAME: &'static str = "Core expertise";

    fn sort() -> Document {
        doc! { "createdAt": -1 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCoreExpertise {
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl NewEntity for CreateCoreExpertise {
    type Entity = CoreExpertise;

    fn schema() -> &'static Schema {
        &CORE_EXPERTISE
    }
}
