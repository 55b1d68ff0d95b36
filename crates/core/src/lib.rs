//! Domain logic shared by the store and HTTP layers.
//!
//! Nothing in this crate performs I/O: schemas, validation, slugs, date
//! parsing and asset-provider request signing are all pure functions.

pub mod content;
pub mod dates;
pub mod error;
pub mod schema;
pub mod signing;
pub mod slug;
pub mod types;
