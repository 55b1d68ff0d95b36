//! Blog queries: public (published only) and admin views.

use bson::doc;

use super::ContentRepo;
use crate::error::DbError;
use crate::models::blog::Blog;
use crate::models::Entity;
use crate::store::{DocumentStore, FindQuery};

pub struct BlogRepo;

impl BlogRepo {
    /// Published posts, newest first, without their `content` body.
    pub async fn list_published(store: &dyn DocumentStore) -> Result<Vec<Blog>, DbError> {
        let query =
            FindQuery::new(doc! { "published": true }, Blog::sort()).exclude(doc! { "content": 0 });
        ContentRepo::query(store, query).await
    }

    /// Every post including drafts, with full content.
    pub async fn list_all(store: &dyn DocumentStore) -> Result<Vec<Blog>, DbError> {
        ContentRepo::list(store).await
    }

    /// Look a post up by slug regardless of its published state.
    pub async fn find_by_slug(
        store: &dyn DocumentStore,
        slug: &str,
    ) -> Result<Option<Blog>, DbError> {
        ContentRepo::find_one(store, doc! { "slug": slug }).await
    }

    /// Look a published post up by slug.
    pub async fn find_published_by_slug(
        store: &dyn DocumentStore,
        slug: &str,
    ) -> Result<Option<Blog>, DbError> {
        ContentRepo::find_one(store, doc! { "slug": slug, "published": true }).await
    }
}
