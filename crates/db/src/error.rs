/// Errors raised by the document store layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// No connection string configured.
    #[error("Database connection string is not configured")]
    MissingUri,

    /// The store could not be reached or rejected the connection.
    #[error("Failed to connect to document store: {0}")]
    Connection(String),

    /// A query or write failed on the server side.
    #[error("Operation on `{collection}` failed: {message}")]
    Query { collection: String, message: String },

    /// An insert violated a unique index.
    #[error("Duplicate value for `{key}` in `{collection}`")]
    DuplicateKey { collection: String, key: String },

    #[error("Failed to encode document: {0}")]
    Encode(#[from] bson::ser::Error),

    #[error("Failed to decode document: {0}")]
    Decode(#[from] bson::de::Error),
}

impl DbError {
    /// Whether the error means the store itself is unavailable.
    pub fn is_connection(&self) -> bool {
        matches!(self, DbError::MissingUri | DbError::Connection(_))
    }
}
