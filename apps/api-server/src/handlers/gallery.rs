//! Gallery resource handlers.
//!
//! Binary uploads are the file-storage collaborator's business; this
//! resource registers the resulting `{name, url}` pair.

use actix_web::{HttpResponse, web};

use folio_shared::ApiResponse;
use folio_shared::dto::CreateGalleryImageRequest;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/gallery
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let images = state
        .gallery
        .list(None)
        .await
        .map_err(|e| AppError::store("Failed to fetch gallery images", e))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(images)))
}

/// GET /api/gallery/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let image = state
        .gallery
        .get(&id)
        .await
        .map_err(|e| AppError::store("Failed to fetch gallery image", e))?
        .ok_or_else(|| AppError::NotFound("Image not found".to_string()))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(image)))
}

/// POST /api/gallery
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateGalleryImageRequest>,
) -> AppResult<HttpResponse> {
    let payload = body
        .into_inner()
        .validate()
        .map_err(|errors| AppError::validation("Invalid image data", errors))?;

    let image = state
        .gallery
        .create(payload)
        .await
        .map_err(|e| AppError::store("Failed to upload image", e))?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(image)))
}

/// DELETE /api/gallery/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let deleted = state
        .gallery
        .delete(&id)
        .await
        .map_err(|e| AppError::store("Failed to delete image", e))?;

    if !deleted {
        return Err(AppError::NotFound("Image not found".to_string()));
    }
    Ok(HttpResponse::Ok().json(ApiResponse::message("Image deleted successfully")))
}
