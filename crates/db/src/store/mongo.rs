//! MongoDB-backed [`DocumentStore`].

use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::TryStreamExt;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, IndexModel};
use tracing::info;

use super::{DocumentStore, FindQuery, IndexSpec};
use crate::error::DbError;

/// Server error code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Fail fast instead of hanging when the server is unreachable.
const TIMEOUT_PARAMS: &str = "serverSelectionTimeoutMS=3000&connectTimeoutMS=3000";

#[derive(Clone)]
pub struct MongoStore {
    db: mongodb::Database,
}

impl MongoStore {
    /// Connect to `uri`, select `db_name` and verify the connection with a ping.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, DbError> {
        info!(db = db_name, "Connecting to MongoDB");

        let uri = if uri.contains('?') {
            format!("{uri}&{TIMEOUT_PARAMS}")
        } else {
            format!("{uri}?{TIMEOUT_PARAMS}")
        };

        let client = Client::with_uri_str(&uri)
            .await
            .map_err(|e| DbError::Connection(e.to_string()))?;

        let db = client.database(db_name);
        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| DbError::Connection(format!("ping failed: {e}")))?;

        info!(db = db_name, "Connected to MongoDB");
        Ok(Self { db })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection::<Document>(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find(&self, collection: &str, query: FindQuery) -> Result<Vec<Document>, DbError> {
        let coll = self.collection(collection);
        let mut action = coll.find(query.filter).sort(query.sort);
        if let Some(projection) = query.projection {
            action = action.projection(projection);
        }
        if let Some(limit) = query.limit {
            action = action.limit(limit);
        }

        let cursor = action.await.map_err(|e| classify(collection, e))?;
        cursor
            .try_collect()
            .await
            .map_err(|e| classify(collection, e))
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, DbError> {
        self.collection(collection)
            .find_one(filter)
            .await
            .map_err(|e| classify(collection, e))
    }

    async fn insert_one(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<Document, DbError> {
        if !document.contains_key("_id") {
            document.insert("_id", ObjectId::new());
        }

        self.collection(collection)
            .insert_one(&document)
            .await
            .map_err(|e| classify(collection, e))?;

        Ok(document)
    }

    async fn ensure_indexes(&self, collection: &str, indexes: &[IndexSpec]) -> Result<(), DbError> {
        if indexes.is_empty() {
            return Ok(());
        }

        let models: Vec<IndexModel> = indexes
            .iter()
            .map(|spec| {
                IndexModel::builder()
                    .keys(spec.keys.clone())
                    .options(
                        IndexOptions::builder()
                            .name(spec.name.to_string())
                            .unique(spec.unique)
                            .build(),
                    )
                    .build()
            })
            .collect();

        self.collection(collection)
            .create_indexes(models)
            .await
            .map_err(|e| classify(collection, e))?;

        Ok(())
    }

    async fn ping(&self) -> Result<(), DbError> {
        self.db
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| DbError::Connection(e.to_string()))?;
        Ok(())
    }
}

/// Map a driver error, singling out unique index violations.
fn classify(collection: &str, err: mongodb::error::Error) -> DbError {
    if let ErrorKind::Write(WriteFailure::WriteError(write_error)) = err.kind.as_ref() {
        if write_error.code == DUPLICATE_KEY_CODE {
            return DbError::DuplicateKey {
                collection: collection.to_string(),
                key: duplicate_key_field(&write_error.message),
            };
        }
    }

    if matches!(
        err.kind.as_ref(),
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_)
    ) {
        return DbError::Connection(err.to_string());
    }

    DbError::Query {
        collection: collection.to_string(),
        message: err.to_string(),
    }
}

/// Pull the field name out of an `E11000 ... dup key: { slug: "x" }` message.
fn duplicate_key_field(message: &str) -> String {
    message
        .split_once("dup key: {")
        .and_then(|(_, rest)| rest.split_once(':'))
        .map(|(field, _)| field.trim().to_string())
        .filter(|field| !field.is_empty())
        .unwrap_or_else(|| "unique index".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_field_from_duplicate_key_message() {
        let msg = r#"E11000 duplicate key error collection: showcase.blogs index: slug_unique dup key: { slug: "hello" }"#;
        assert_eq!(duplicate_key_field(msg), "slug");
    }

    #[test]
    fn falls_back_when_message_has_no_key() {
        assert_eq!(duplicate_key_field("E11000 duplicate key"), "unique index");
    }

    #[tokio::test]
    async fn unreachable_server_is_a_connection_error() {
        let result = MongoStore::connect("mongodb://127.0.0.1:1", "showcase").await;
        assert!(matches!(result, Err(DbError::Connection(_))));
    }
}
