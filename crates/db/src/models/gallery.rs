//! Gallery images grouped by category.

use bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use showcase_core::content::{
    GALLERY, GALLERY_CATEGORY_EVENTS, GALLERY_CATEGORY_PROJECTS, GALLERY_CATEGORY_TEAM,
    GALLERY_CATEGORY_WORKSPACE,
};
use showcase_core::schema::Schema;
use showcase_core::types::Timestamp;

use super::{Entity, NewEntity};
use crate::serde_ext::{object_id_hex, timestamp};
use crate::store::IndexSpec;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// The closed set of gallery categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryCategory {
    #[default]
    Projects,
    Events,
    Team,
    Workspace,
}

impl GalleryCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            GalleryCategory::Projects => GALLERY_CATEGORY_PROJECTS,
            GalleryCategory::Events => GALLERY_CATEGORY_EVENTS,
            GalleryCategory::Team => GALLERY_CATEGORY_TEAM,
            GalleryCategory::Workspace => GALLERY_CATEGORY_WORKSPACE,
        }
    }
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    #[serde(rename = "_id", with = "object_id_hex")]
    pub id: ObjectId,
    pub title: String,
    pub category: GalleryCategory,
    pub image: String,
    pub image_public_id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: Timestamp,
    #[serde(with = "timestamp")]
    pub updated_at: Timestamp,
}

impl Entity for GalleryItem {
    const COLLECTION: &'static str = "galleries";
    const NAME: &'static str = "Gallery item";

    fn sort() -> Document {
        doc! { "createdAt": -1 }
    }

    fn indexes() -> Vec<IndexSpec> {
        vec![IndexSpec::new(
            "category_created_at",
            doc! { "category": 1, "createdAt": -1 },
        )]
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGalleryItem {
    pub title: String,
    #[serde(default)]
    pub category: GalleryCategory,
    pub image: String,
    pub image_public_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewEntity for CreateGalleryItem {
    type Entity = GalleryItem;

    fn schema() -> &'static Schema {
        &GALLERY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use showcase_core::content::GALLERY_CATEGORIES;

    #[test]
    fn category_names_match_schema() {
        let names: Vec<&str> = [
            GalleryCategory::Projects,
            GalleryCategory::Events,
            GalleryCategory::Team,
            GalleryCategory::Workspace,
        ]
        .into_iter()
        .map(GalleryCategory::as_str)
        .collect();
        assert_eq!(names, GALLERY_CATEGORIES);
    }

    #[test]
    fn omitted_category_becomes_projects() {
        let dto = CreateGalleryItem::from_payload(json!({
            "title": "Office",
            "image": "https://img.example/office.png",
            "imagePublicId": "gallery/office"
        }))
        .unwrap();
        assert_eq!(dto.category, GalleryCategory::Projects);
        assert_eq!(dto.to_document().unwrap().get_str("category").unwrap(), "projects");
    }
}
