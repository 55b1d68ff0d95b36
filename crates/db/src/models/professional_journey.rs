//! Positions held, newest first.

use bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use showcase_core::content::PROFESSIONAL_JOURNEY;
use showcase_core::dates::parse_date;
use showcase_core::schema::Schema;
use showcase_core::types::Timestamp;

use super::{Entity, NewEntity};
use crate::error::DbError;
use crate::serde_ext::{object_id_hex, option_timestamp, timestamp};
use crate::store::IndexSpec;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalJourney {
    #[serde(rename = "_id", with = "object_id_hex")]
    pub id: ObjectId,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(with = "timestamp")]
    pub start_date: Timestamp,
    #[serde(default, with = "option_timestamp")]
    pub end_date: Option<Timestamp>,
    #[serde(default)]
    pub current: bool,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(with = "timestamp")]
    pub created_at: Timestamp,
    #[serde(with = "timestamp")]
    pub updated_at: Timestamp,
}

impl Entity for ProfessionalJourney {
    const COLLECTION: &'static str = "professionaljourneys";
    const NAME: &'static str = "Professional journey";

    fn sort() -> Document {
        doc! { "startDate": -1, "createdAt": -1 }
    }

    fn indexes() -> Vec<IndexSpec> {
        vec![IndexSpec::new("start_date", doc! { "startDate": -1 })]
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Dates arrive as strings and are stored as BSON datetimes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfessionalJourney {
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing)]
    pub start_date: String,
    #[serde(default, skip_serializing)]
    pub end_date: Option<String>,
    pub current: bool,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl NewEntity for CreateProfessionalJourney {
    type Entity = ProfessionalJourney;

    fn schema() -> &'static Schema {
        &PROFESSIONAL_JOURNEY
    }

    fn to_document(&self) -> Result<Document, DbError> {
        let mut document = bson::to_document(self)?;

        let start = parse_date(&self.start_date).ok_or_else(|| invalid_date("startDate"))?;
        document.insert("startDate", bson::DateTime::from_chrono(start));

        if let Some(end) = self.end_date.as_deref().filter(|s| !s.is_empty()) {
            let end = parse_date(end).ok_or_else(|| invalid_date("endDate"))?;
            document.insert("endDate", bson::DateTime::from_chrono(end));
        }

        Ok(document)
    }
}

fn invalid_date(field: &str) -> DbError {
    DbError::Query {
        collection: ProfessionalJourney::COLLECTION.to_string(),
        message: format!("{field} is not a valid date"),
    }
}
