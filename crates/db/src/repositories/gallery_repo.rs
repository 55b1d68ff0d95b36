//! Gallery listing with the optional category filter.

use bson::doc;
use showcase_core::content::GALLERY_CATEGORY_ALL;

use super::ContentRepo;
use crate::error::DbError;
use crate::models::gallery::GalleryItem;
use crate::store::DocumentStore;

pub struct GalleryRepo;

impl GalleryRepo {
    /// List gallery items, newest first.
    ///
    /// `None` and `"all"` return every item. Any other value is matched
    /// literally against `category`, so unknown categories yield nothing.
    pub async fn list_by_category(
        store: &dyn DocumentStore,
        category: Option<&str>,
    ) -> Result<Vec<GalleryItem>, DbError> {
        match category.map(str::trim) {
            None | Some("") | Some(GALLERY_CATEGORY_ALL) => ContentRepo::list(store).await,
            Some(category) => {
                ContentRepo::list_where(store, doc! { "category": category }).await
            }
        }
    }
}
