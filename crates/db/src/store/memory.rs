//! In-process [`DocumentStore`] used by tests and `memory://` deployments.
//!
//! Supports the subset of query semantics the repositories rely on:
//! top-level equality filters, multi-key sorts, exclusion projections,
//! limits and unique indexes.

use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use bson::{oid::ObjectId, Bson, Document};
use tokio::sync::RwLock;

use super::{DocumentStore, FindQuery, IndexSpec};
use crate::error::DbError;

#[derive(Default)]
struct MemoryCollection {
    documents: Vec<Document>,
    /// Field sets covered by unique indexes.
    unique_keys: Vec<Vec<String>>,
}

/// A document store held entirely in memory.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, MemoryCollection>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently stored in `collection`.
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, |c| c.documents.len())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(&self, collection: &str, query: FindQuery) -> Result<Vec<Document>, DbError> {
        let collections = self.collections.read().await;
        let Some(coll) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        let mut matched: Vec<Document> = coll
            .documents
            .iter()
            .filter(|doc| matches_filter(doc, &query.filter))
            .cloned()
            .collect();

        matched.sort_by(|a, b| compare_documents(a, b, &query.sort));

        if let Some(limit) = query.limit.filter(|l| *l > 0) {
            matched.truncate(limit as usize);
        }

        if let Some(projection) = &query.projection {
            for doc in &mut matched {
                apply_exclusion(doc, projection);
            }
        }

        Ok(matched)
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, DbError> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).and_then(|coll| {
            coll.documents
                .iter()
                .find(|doc| matches_filter(doc, &filter))
                .cloned()
        }))
    }

    async fn insert_one(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<Document, DbError> {
        if !document.contains_key("_id") {
            document.insert("_id", ObjectId::new());
        }

        let mut collections = self.collections.write().await;
        let coll = collections.entry(collection.to_string()).or_default();

        let mut unique_sets = coll.unique_keys.clone();
        unique_sets.push(vec!["_id".to_string()]);
        for keys in &unique_sets {
            let clash = coll
                .documents
                .iter()
                .any(|existing| same_key_values(existing, &document, keys));
            if clash {
                return Err(DbError::DuplicateKey {
                    collection: collection.to_string(),
                    key: keys.join(", "),
                });
            }
        }

        coll.documents.push(document.clone());
        Ok(document)
    }

    async fn ensure_indexes(&self, collection: &str, indexes: &[IndexSpec]) -> Result<(), DbError> {
        let mut collections = self.collections.write().await;
        let coll = collections.entry(collection.to_string()).or_default();

        for spec in indexes.iter().filter(|s| s.unique) {
            let keys: Vec<String> = spec.keys.keys().cloned().collect();
            if !coll.unique_keys.contains(&keys) {
                coll.unique_keys.push(keys);
            }
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}

fn matches_filter(doc: &Document, filter: &Document) -> bool {
    filter.iter().all(|(key, expected)| doc.get(key) == Some(expected))
}

/// Two documents clash on a unique index when every indexed field is present
/// in the new document and equal in both.
fn same_key_values(existing: &Document, candidate: &Document, keys: &[String]) -> bool {
    keys.iter().all(|key| match candidate.get(key) {
        Some(value) => existing.get(key) == Some(value),
        None => false,
    })
}

fn apply_exclusion(doc: &mut Document, projection: &Document) {
    for (key, flag) in projection {
        let excluded = match flag {
            Bson::Int32(0) | Bson::Int64(0) | Bson::Boolean(false) => true,
            Bson::Double(d) => *d == 0.0,
            _ => false,
        };
        if excluded {
            doc.remove(key);
        }
    }
}

fn compare_documents(a: &Document, b: &Document, sort: &Document) -> Ordering {
    for (key, direction) in sort {
        let descending = match direction {
            Bson::Int32(d) => *d < 0,
            Bson::Int64(d) => *d < 0,
            Bson::Double(d) => *d < 0.0,
            _ => false,
        };
        let ordering = compare_values(a.get(key), b.get(key));
        let ordering = if descending {
            ordering.reverse()
        } else {
            ordering
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Missing and `null` values sort before everything else.
fn compare_values(a: Option<&Bson>, b: Option<&Bson>) -> Ordering {
    let a = a.filter(|v| !matches!(v, Bson::Null));
    let b = b.filter(|v| !matches!(v, Bson::Null));

    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => match (a, b) {
            (Bson::String(x), Bson::String(y)) => x.cmp(y),
            (Bson::DateTime(x), Bson::DateTime(y)) => {
                x.timestamp_millis().cmp(&y.timestamp_millis())
            }
            (Bson::Boolean(x), Bson::Boolean(y)) => x.cmp(y),
            (Bson::ObjectId(x), Bson::ObjectId(y)) => x.bytes().cmp(&y.bytes()),
            _ => match (as_number(a), as_number(b)) {
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            },
        },
    }
}

fn as_number(value: &Bson) -> Option<f64> {
    match value {
        Bson::Int32(n) => Some(f64::from(*n)),
        Bson::Int64(n) => Some(*n as f64),
        Bson::Double(n) => Some(*n),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[tokio::test]
    async fn sorts_on_multiple_keys() {
        let store = MemoryStore::new();
        for (order, title) in [(2, "b"), (1, "z"), (1, "a")] {
            store
                .insert_one("faqs", doc! { "order": order, "title": title })
                .await
                .unwrap();
        }

        let docs = store
            .find(
                "faqs",
                FindQuery::new(doc! {}, doc! { "order": 1, "title": -1 }),
            )
            .await
            .unwrap();
        let titles: Vec<&str> = docs.iter().map(|d| d.get_str("title").unwrap()).collect();
        assert_eq!(titles, vec!["z", "a", "b"]);
    }

    #[tokio::test]
    async fn filters_projects_and_limits() {
        let store = MemoryStore::new();
        for (i, published) in [true, false, true].into_iter().enumerate() {
            store
                .insert_one(
                    "blogs",
                    doc! { "n": i as i32, "published": published, "content": "body" },
                )
                .await
                .unwrap();
        }

        let docs = store
            .find(
                "blogs",
                FindQuery::new(doc! { "published": true }, doc! { "n": -1 })
                    .exclude(doc! { "content": 0 })
                    .limit(1),
            )
            .await
            .unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].get_i32("n").unwrap(), 2);
        assert!(!docs[0].contains_key("content"));
    }

    #[tokio::test]
    async fn enforces_unique_indexes() {
        let store = MemoryStore::new();
        store
            .ensure_indexes(
                "blogs",
                &[IndexSpec::unique("slug_unique", doc! { "slug": 1 })],
            )
            .await
            .unwrap();

        store
            .insert_one("blogs", doc! { "slug": "hello" })
            .await
            .unwrap();
        let err = store
            .insert_one("blogs", doc! { "slug": "hello" })
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::DuplicateKey { ref key, .. } if key == "slug"));
        assert_eq!(store.count("blogs").await, 1);
    }

    #[tokio::test]
    async fn missing_collection_is_empty() {
        let store = MemoryStore::new();
        let docs = store.find("nothing", FindQuery::default()).await.unwrap();
        assert!(docs.is_empty());
        assert!(store.find_one("nothing", doc! {}).await.unwrap().is_none());
    }

    #[test]
    fn missing_values_sort_first() {
        assert_eq!(
            compare_values(None, Some(&Bson::Int32(0))),
            Ordering::Less
        );
        assert_eq!(
            compare_values(Some(&Bson::Int32(2)), Some(&Bson::Double(1.5))),
            Ordering::Greater
        );
    }
}
