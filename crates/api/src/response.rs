//! Shared response envelope types for API handlers.
//!
//! Envelope shapes differ per resource and are kept as the public site
//! expects them: `{ success, data }`, `{ success, data, count }`,
//! `{ success, services, count }`, or a bare JSON array.

use serde::Serialize;

/// `{ "success": true, "data": T }`.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse::new(items)))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{ "success": true, "data": [..], "count": n }`.
#[derive(Debug, Serialize)]
pub struct CountedResponse<T: Serialize> {
    pub success: bool,
    pub data: Vec<T>,
    pub count: usize,
}

impl<T: Serialize> CountedResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// `{ "success": true, "services": [..], "count": n }`.
#[derive(Debug, Serialize)]
pub struct ServicesResponse<T: Serialize> {
    pub success: bool,
    pub services: Vec<T>,
    pub count: usize,
}

impl<T: Serialize> ServicesResponse<T> {
    pub fn new(services: Vec<T>) -> Self {
        Self {
            success: true,
            count: services.len(),
            services,
        }
    }
}

/// `{ "success": true, "message": "..." }`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}
