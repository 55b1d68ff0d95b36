//! Links to the site's social network profiles.

use bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use showcase_core::content::SOCIAL_LINK;
use showcase_core::schema::Schema;
use showcase_core::types::Timestamp;

use super::{Entity, NewEntity};
use crate::serde_ext::{object_id_hex, timestamp};

/// Supported social networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Facebook,
    Twitter,
    Instagram,
    Linkedin,
    Youtube,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    #[serde(rename = "_id", with = "object_id_hex")]
    pub id: ObjectId,
    pub platform: SocialPlatform,
    pub url: String,
    #[serde(with = "timestamp")]
    pub created_at: Timestamp,
    #[serde(with = "timestamp")]
    pub updated_at: Timestamp,
}

impl Entity for SocialLink {
    const COLLECTION: &'static str = "sociallinks";
    const NAME: &'static str = "Social link";

    fn sort() -> Document {
        doc! { "createdAt": 1 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSocialLink {
    pub platform: SocialPlatform,
    pub url: String,
}

impl NewEntity for CreateSocialLink {
    type Entity = SocialLink;

    fn schema() -> &'static Schema {
        &SOCIAL_LINK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use showcase_core::content::SOCIAL_PLATFORMS;

    #[test]
    fn every_schema_platform_deserializes() {
        for platform in SOCIAL_PLATFORMS {
            let dto = CreateSocialLink::from_payload(
                json!({ "platform": platform, "url": "https://example.com/me" }),
            )
            .unwrap();
            assert_eq!(serde_json::to_value(dto.platform).unwrap(), json!(platform));
        }
    }
}
