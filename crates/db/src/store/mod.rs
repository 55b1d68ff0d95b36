//! The document store seam.
//!
//! Handlers and repositories only ever talk to [`DocumentStore`], so the
//! same code runs against MongoDB in production and against
//! [`MemoryStore`] in tests and local development.

mod memory;
mod mongo;

use async_trait::async_trait;
use bson::Document;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use crate::error::DbError;

/// Parameters of a multi-document query.
#[derive(Debug, Clone, Default)]
pub struct FindQuery {
    /// Top-level equality filter.
    pub filter: Document,
    /// Ordered sort keys, `1` ascending / `-1` descending.
    pub sort: Document,
    /// Field exclusion projection (`{ field: 0 }`).
    pub projection: Option<Document>,
    pub limit: Option<i64>,
}

impl FindQuery {
    pub fn new(filter: Document, sort: Document) -> Self {
        Self {
            filter,
            sort,
            projection: None,
            limit: None,
        }
    }

    pub fn exclude(mut self, projection: Document) -> Self {
        self.projection = Some(projection);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// An index declared by an entity schema.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexSpec {
    pub name: &'static str,
    pub keys: Document,
    pub unique: bool,
}

impl IndexSpec {
    pub fn new(name: &'static str, keys: Document) -> Self {
        Self {
            name,
            keys,
            unique: false,
        }
    }

    pub fn unique(name: &'static str, keys: Document) -> Self {
        Self {
            name,
            keys,
            unique: true,
        }
    }
}

/// A schema-flexible store of BSON documents in named collections.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Return every document matching the query, in sort order.
    async fn find(&self, collection: &str, query: FindQuery) -> Result<Vec<Document>, DbError>;

    /// Return the first document matching `filter`, if any.
    async fn find_one(&self, collection: &str, filter: Document)
        -> Result<Option<Document>, DbError>;

    /// Insert a document and return it as stored (with its `_id`).
    async fn insert_one(&self, collection: &str, document: Document) -> Result<Document, DbError>;

    /// Create the given indexes if they do not exist yet.
    async fn ensure_indexes(&self, collection: &str, indexes: &[IndexSpec]) -> Result<(), DbError>;

    /// Round-trip check that the store is reachable.
    async fn ping(&self) -> Result<(), DbError>;
}
