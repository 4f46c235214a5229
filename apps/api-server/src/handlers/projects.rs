//! Project resource handlers.

use actix_web::{HttpResponse, web};

use folio_shared::ApiResponse;
use folio_shared::dto::{CreateProjectRequest, UpdateProjectRequest};

use crate::error::{AppError, AppResult};
use crate::handlers::ListQuery;
use crate::state::AppState;

/// GET /api/projects?status=draft|published
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let status = query.into_inner().status()?;
    let projects = state
        .projects
        .list(status)
        .await
        .map_err(|e| AppError::store("Failed to fetch projects", e))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(projects)))
}

/// GET /api/projects/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let project = state
        .projects
        .get(&id)
        .await
        .map_err(|e| AppError::store("Failed to fetch project", e))?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(project)))
}

/// POST /api/projects
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateProjectRequest>,
) -> AppResult<HttpResponse> {
    let payload = body
        .into_inner()
        .validate()
        .map_err(|errors| AppError::validation("Invalid project data", errors))?;

    let project = state
        .projects
        .create(payload)
        .await
        .map_err(|e| AppError::store("Failed to create project", e))?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(project)))
}

/// PUT /api/projects/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateProjectRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let patch = body
        .into_inner()
        .validate()
        .map_err(|errors| AppError::validation("Invalid project data", errors))?;

    let project = state
        .projects
        .update(&id, patch)
        .await
        .map_err(|e| AppError::store("Failed to update project", e))?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(project)))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let deleted = state
        .projects
        .delete(&id)
        .await
        .map_err(|e| AppError::store("Failed to delete project", e))?;

    if !deleted {
        return Err(AppError::NotFound("Project not found".to_string()));
    }
    Ok(HttpResponse::Ok().json(ApiResponse::message("Project deleted successfully")))
}
