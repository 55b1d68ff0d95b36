//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&dyn DocumentStore` as the first argument.

pub mod blog_repo;
pub mod content_repo;
pub mod gallery_repo;

pub use blog_repo::BlogRepo;
pub use content_repo::ContentRepo;
pub use gallery_repo::GalleryRepo;
