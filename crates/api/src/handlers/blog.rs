//! Handlers for the `/blogs` resource.
//!
//! Public routes only ever see published posts; the public list omits the
//! post body. Admin routes see drafts and full content.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use showcase_core::error::CoreError;
use showcase_db::models::blog::{Blog, CreateBlog};
use showcase_db::models::Entity;
use showcase_db::repositories::BlogRepo;

use super::content::{self, JsonBody};
use crate::error::{AppError, AppResult, ResourcePolicy};
use crate::response::DataResponse;
use crate::state::AppState;

const BLOG: ResourcePolicy = ResourcePolicy::new("blog", "blogs");

/// GET /api/blogs
pub async fn list_published(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Blog>>>> {
    let store = state.db.connect().await.map_err(|e| BLOG.fetch_error(e))?;
    let blogs = BlogRepo::list_published(store.as_ref())
        .await
        .map_err(|e| BLOG.fetch_error(e))?;
    Ok(Json(DataResponse::new(blogs)))
}

/// GET /api/blogs/{slug}
pub async fn get_published(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<Blog>>> {
    let store = state.db.connect().await.map_err(|e| BLOG.fetch_error(e))?;
    let blog = BlogRepo::find_published_by_slug(store.as_ref(), &slug)
        .await
        .map_err(|e| BLOG.fetch_error(e))?
        .ok_or(AppError::Core(CoreError::NotFound(Blog::NAME)))?;
    Ok(Json(DataResponse::new(blog)))
}

/// GET /api/admin/blogs -- drafts included.
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Blog>>>> {
    let store = state.db.connect().await.map_err(|e| BLOG.fetch_error(e))?;
    let blogs = BlogRepo::list_all(store.as_ref())
        .await
        .map_err(|e| BLOG.fetch_error(e))?;
    Ok(Json(DataResponse::new(blogs)))
}

/// GET /api/admin/blogs/slug/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<Blog>>> {
    let store = state.db.connect().await.map_err(|e| BLOG.fetch_error(e))?;
    let blog = BlogRepo::find_by_slug(store.as_ref(), &slug)
        .await
        .map_err(|e| BLOG.fetch_error(e))?
        .ok_or(AppError::Core(CoreError::NotFound(Blog::NAME)))?;
    Ok(Json(DataResponse::new(blog)))
}

/// POST /api/admin/blogs
///
/// The slug is derived from the title when omitted; a taken slug is a 400.
pub async fn create_blog(
    State(state): State<AppState>,
    payload: JsonBody,
) -> AppResult<(StatusCode, Json<DataResponse<Blog>>)> {
    content::create::<CreateBlog>(&state, &BLOG, payload).await
}
