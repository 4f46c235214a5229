//! Blog post resource handlers.

use actix_web::{HttpResponse, web};

use folio_shared::ApiResponse;
use folio_shared::dto::{CreateBlogRequest, UpdateBlogRequest};

use crate::error::{AppError, AppResult};
use crate::handlers::ListQuery;
use crate::state::AppState;

/// GET /api/blogs?status=draft|published
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let status = query.into_inner().status()?;
    let blogs = state
        .blogs
        .list(status)
        .await
        .map_err(|e| AppError::store("Failed to fetch blogs", e))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(blogs)))
}

/// GET /api/blogs/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let blog = state
        .blogs
        .get(&id)
        .await
        .map_err(|e| AppError::store("Failed to fetch blog", e))?
        .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(blog)))
}

/// POST /api/blogs
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateBlogRequest>,
) -> AppResult<HttpResponse> {
    let payload = body
        .into_inner()
        .validate()
        .map_err(|errors| AppError::validation("Invalid blog data", errors))?;

    let blog = state
        .blogs
        .create(payload)
        .await
        .map_err(|e| AppError::store("Failed to create blog", e))?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(blog)))
}

/// PUT /api/blogs/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateBlogRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let patch = body
        .into_inner()
        .validate()
        .map_err(|errors| AppError::validation("Invalid blog data", errors))?;

    let blog = state
        .blogs
        .update(&id, patch)
        .await
        .map_err(|e| AppError::store("Failed to update blog", e))?
        .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(blog)))
}

/// DELETE /api/blogs/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let deleted = state
        .blogs
        .delete(&id)
        .await
        .map_err(|e| AppError::store("Failed to delete blog", e))?;

    if !deleted {
        return Err(AppError::NotFound("Blog not found".to_string()));
    }
    Ok(HttpResponse::Ok().json(ApiResponse::message("Blog deleted successfully")))
}
