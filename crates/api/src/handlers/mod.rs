pub mod about;
pub mod auth;
pub mod blog;
pub mod cloudinary;
pub mod contact;
pub mod content;
pub mod dashboard;
pub mod home;
