//! Contact details shown on the contact page. The latest document wins.

use bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use showcase_core::content::CONTACT_INFO;
use showcase_core::schema::Schema;
use showcase_core::types::Timestamp;

use super::{Entity, NewEntity};
use crate::serde_ext::{object_id_hex, timestamp};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(rename = "_id", with = "object_id_hex")]
    pub id: ObjectId,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub working_hours: Option<String>,
    #[serde(default)]
    pub map_url: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: Timestamp,
    #[serde(with = "timestamp")]
    pub updated_at: Timestamp,
}

impl Entity for ContactInfo {
    const COLLECTION: &'static str = "contactinfos";
    const NAME: &'static str = "Contact info";

    fn sort() -> Document {
        doc! { "createdAt": -1 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
}

impl NewEntity for CreateContactInfo {
    type Entity = ContactInfo;

    fn schema() -> &'static Schema {
        &CONTACT_INFO
    }
}
