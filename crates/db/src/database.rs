//! Process-wide document store handle with lazy, memoized connection.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::info;

use crate::error::DbError;
use crate::models::index_plan;
use crate::store::{DocumentStore, MemoryStore, MongoStore};

/// Connection string selecting the in-memory store.
pub const MEMORY_URI: &str = "memory://";

/// Where the document store lives.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Connection string; `None` means not configured.
    pub uri: Option<String>,
    /// Database name inside the server.
    pub name: String,
}

/// The single store connection shared by every request.
///
/// Nothing connects until the first [`Database::connect`] call. Concurrent
/// first callers share one initialization; later calls return the memoized
/// handle. A failed initialization is not cached, so the next request tries
/// again.
pub struct Database {
    config: DatabaseConfig,
    store: OnceCell<Arc<dyn DocumentStore>>,
}

impl Database {
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            store: OnceCell::new(),
        }
    }

    /// A database backed by a fresh, empty [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(DatabaseConfig {
            uri: Some(MEMORY_URI.to_string()),
            name: "showcase".to_string(),
        })
    }

    /// Return the active store, connecting on first use.
    pub async fn connect(&self) -> Result<Arc<dyn DocumentStore>, DbError> {
        let store = self.store.get_or_try_init(|| self.open()).await?;
        Ok(Arc::clone(store))
    }

    /// Whether a connection has been established.
    pub fn is_connected(&self) -> bool {
        self.store.initialized()
    }

    /// Connect if needed and ping the store.
    pub async fn health_check(&self) -> Result<(), DbError> {
        self.connect().await?.ping().await
    }

    async fn open(&self) -> Result<Arc<dyn DocumentStore>, DbError> {
        let uri = self
            .config
            .uri
            .as_deref()
            .map(str::trim)
            .filter(|uri| !uri.is_empty())
            .ok_or(DbError::MissingUri)?;

        let store: Arc<dyn DocumentStore> = if uri.starts_with(MEMORY_URI) {
            info!("Using in-memory document store");
            Arc::new(MemoryStore::new())
        } else {
            Arc::new(MongoStore::connect(uri, &self.config.name).await?)
        };

        for (collection, indexes) in index_plan() {
            store.ensure_indexes(collection, &indexes).await?;
        }

        Ok(store)
    }
}
