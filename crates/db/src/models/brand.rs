//! Partner brand logos.

use bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use showcase_core::content::BRAND;
use showcase_core::schema::Schema;
use showcase_core::types::Timestamp;

use super::{Entity, NewEntity};
use crate::serde_ext::{object_id_hex, timestamp};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    #[serde(rename = "_id", with = "object_id_hex")]
    pub id: ObjectId,
    pub name: String,
    pub logo: String,
    #[serde(default)]
    pub logo_public_id: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: Timestamp,
    #[serde(with = "timestamp")]
    pub updated_at: Timestamp,
}

impl Entity for Brand {
    const COLLECTION: &'static str = "brands";
    const NAME: &'static str = "Brand";

    /// Oldest first, the order logos were added.
    fn sort() -> Document {
        doc! { "createdAt": 1 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrand {
    pub name: String,
    pub logo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_public_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl NewEntity for CreateBrand {
    type Entity = Brand;

    fn schema() -> &'static Schema {
        &BRAND
    }

    fn image_pair(&self) -> Option<(Option<&str>, Option<&str>)> {
        Some((Some(self.logo.as_str()), self.logo_public_id.as_deref()))
    }
}
