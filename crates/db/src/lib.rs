//! Document store access for the showcase backend.
//!
//! - [`store`] -- the [`DocumentStore`] seam with MongoDB and in-memory
//!   implementations.
//! - [`database`] -- the process-wide, lazily connected [`Database`] handle.
//! - [`models`] -- typed entity documents and their create DTOs.
//! - [`repositories`] -- query helpers over the typed models.

pub mod database;
pub mod error;
pub mod models;
pub mod repositories;
pub mod serde_ext;
pub mod store;

pub use database::{Database, DatabaseConfig, MEMORY_URI};
pub use error::DbError;
pub use store::{DocumentStore, FindQuery, IndexSpec};
