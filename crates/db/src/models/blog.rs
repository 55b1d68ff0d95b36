//! Blog posts.
//!
//! Posts are addressed by a unique slug. Drafts (`published = false`) are
//! only visible through the admin API.

use bson::{doc, oid::ObjectId, Document};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use showcase_core::content::BLOG;
use showcase_core::dates::parse_date;
use showcase_core::schema::Schema;
use showcase_core::slug::generate_slug;
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
pub struct Blog {
    #[serde(rename = "_id", with = "object_id_hex")]
    pub id: ObjectId,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    /// Absent when listed publicly; the list projection drops it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub cover_image_public_id: Option<String>,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(default, with = "option_timestamp")]
    pub published_at: Option<Timestamp>,
    #[serde(with = "timestamp")]
    pub created_at: Timestamp,
    #[serde(with = "timestamp")]
    pub updated_at: Timestamp,
}

impl Entity for Blog {
    const COLLECTION: &'static str = "blogs";
    const NAME: &'static str = "Blog";

    fn sort() -> Document {
        doc! { "createdAt": -1 }
    }

    fn indexes() -> Vec<IndexSpec> {
        vec![
            IndexSpec::unique("slug_unique", doc! { "slug": 1 }),
            IndexSpec::new(
                "published_created_at",
                doc! { "published": 1, "createdAt": -1 },
            ),
        ]
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlog {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_public_id: Option<String>,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub published: bool,
    #[serde(default, skip_serializing)]
    pub published_at: Option<String>,
}

impl NewEntity for CreateBlog {
    type Entity = Blog;

    fn schema() -> &'static Schema {
        &BLOG
    }

    /// Derive the slug from the title when the payload has none.
    fn prepare(mut payload: Value) -> Value {
        if let Value::Object(data) = &mut payload {
            let has_slug = data
                .get("slug")
                .and_then(Value::as_str)
                .is_some_and(|s| !s.trim().is_empty());
            if !has_slug {
                if let Some(title) = data.get("title").and_then(Value::as_str) {
                    let slug = generate_slug(title);
                    data.insert("slug".to_string(), Value::String(slug));
                }
            }
        }
        payload
    }

    /// Published posts without an explicit `publishedAt` are stamped now.
    fn to_document(&self) -> Result<Document, DbError> {
        let mut document = bson::to_document(self)?;

        let published_at = match self.published_at.as_deref().filter(|s| !s.is_empty()) {
            Some(raw) => Some(parse_date(raw).ok_or_else(|| DbError::Query {
                collection: Blog::COLLECTION.to_string(),
                message: "publishedAt is not a valid date".to_string(),
            })?),
            None if self.published => Some(Utc::now()),
            None => None,
        };
        if let Some(at) = published_at {
            document.insert("publishedAt", bson::DateTime::from_chrono(at));
        }

        Ok(document)
    }

    fn image_pair(&self) -> Option<(Option<&str>, Option<&str>)> {
        Some((
            self.cover_image.as_deref(),
            self.cover_image_public_id.as_deref(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> Value {
        json!({
            "title": "Hello, Rust World!",
            "excerpt": "A first post",
            "content": "Body text"
        })
    }

    #[test]
    fn slug_is_generated_from_title() {
        let dto = CreateBlog::from_payload(payload()).unwrap();
        assert_eq!(dto.slug, "hello-rust-world");
        assert_eq!(dto.author, "Admin");
        assert!(!dto.published);
    }

    #[test]
    fn explicit_slug_is_kept_and_checked() {
        let mut raw = payload();
        raw["slug"] = json!("Not A Slug");
        assert!(CreateBlog::from_payload(raw).is_err());
    }

    #[test]
    fn drafts_have_no_publish_date() {
        let dto = CreateBlog::from_payload(payload()).unwrap();
        assert!(!dto.to_document().unwrap().contains_key("publishedAt"));
    }

    #[test]
    fn published_posts_are_stamped() {
        let mut raw = payload();
        raw["published"] = json!(true);
        let document = CreateBlog::from_payload(raw).unwrap().to_document().unwrap();
        assert!(document.get_datetime("publishedAt").is_ok());
    }
}
