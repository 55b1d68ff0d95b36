//! Frequently asked questions.

use bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use showcase_core::content::FAQ;
use showcase_core::schema::Schema;
use showcase_core::types::Timestamp;

use super::{Entity, NewEntity};
use crate::serde_ext::{object_id_hex, timestamp};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    #[serde(rename = "_id", with = "object_id_hex")]
    pub id: ObjectId,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub order: i64,
    #[serde(with = "timestamp")]
    pub created_at: Timestamp,
    #[serde(with = "timestamp")]
    pub updated_at: Timestamp,
}

impl Entity for Faq {
    const COLLECTION: &'static str = "faqs";
    const NAME: &'static str = "FAQ";

    fn sort() -> Document {
        doc! { "order": 1, "createdAt": 1 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFaq {
    pub question: String,
    pub answer: String,
    pub order: i64,
}

impl NewEntity for CreateFaq {
    type Entity = Faq;

    fn schema() -> &'static Schema {
        &FAQ
    }
}
