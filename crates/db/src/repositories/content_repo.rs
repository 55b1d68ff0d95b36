//! Generic list / lookup / create over any [`Entity`].

use bson::{doc, Document};
use showcase_core::content::image_pair_mismatch;
use tracing::{info, warn};

use crate::error::DbError;
use crate::models::{Entity, NewEntity};
use crate::store::{DocumentStore, FindQuery};

/// Data access shared by every content collection.
pub struct ContentRepo;

impl ContentRepo {
    /// All documents of `E` in its fixed sort order.
    pub async fn list<E: Entity>(store: &dyn DocumentStore) -> Result<Vec<E>, DbError> {
        Self::list_where(store, doc! {}).await
    }

    /// Documents of `E` matching an equality filter, in its fixed sort order.
    pub async fn list_where<E: Entity>(
        store: &dyn DocumentStore,
        filter: Document,
    ) -> Result<Vec<E>, DbError> {
        Self::query(store, FindQuery::new(filter, E::sort())).await
    }

    /// Run an arbitrary query against `E`'s collection.
    pub async fn query<E: Entity>(
        store: &dyn DocumentStore,
        query: FindQuery,
    ) -> Result<Vec<E>, DbError> {
        store
            .find(E::COLLECTION, query)
            .await?
            .into_iter()
            .map(|document| bson::from_document::<E>(document).map_err(DbError::from))
            .collect()
    }

    /// The first document of `E` matching `filter`.
    pub async fn find_one<E: Entity>(
        store: &dyn DocumentStore,
        filter: Document,
    ) -> Result<Option<E>, DbError> {
        store
            .find_one(E::COLLECTION, filter)
            .await?
            .map(bson::from_document::<E>)
            .transpose()
            .map_err(DbError::from)
    }

    /// The first document of `E` in sort order, if any.
    pub async fn latest<E: Entity>(store: &dyn DocumentStore) -> Result<Option<E>, DbError> {
        let mut items =
            Self::query::<E>(store, FindQuery::new(doc! {}, E::sort()).limit(1)).await?;
        Ok(items.pop())
    }

    /// Insert a validated DTO, stamping `createdAt` / `updatedAt`.
    pub async fn create<D: NewEntity>(
        store: &dyn DocumentStore,
        dto: &D,
    ) -> Result<D::Entity, DbError> {
        let collection = <D::Entity as Entity>::COLLECTION;

        if let Some((image, public_id)) = dto.image_pair() {
            if image_pair_mismatch(image, public_id) {
                warn!(collection, "Image stored without its matching public id");
            }
        }

        let mut document = dto.to_document()?;
        let now = bson::DateTime::now();
        document.insert("createdAt", now);
        document.insert("updatedAt", now);

        let stored = store.insert_one(collection, document).await?;
        let id = stored.get_object_id("_id").map(|id| id.to_hex()).ok();
        info!(collection, id = ?id, "Document created");

        Ok(bson::from_document(stored)?)
    }
}
