//! HTTP handlers and route configuration.

mod blogs;
mod gallery;
mod health;
mod projects;

use actix_web::web;
use serde::Deserialize;

use folio_core::domain::Status;

use crate::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/blogs")
                    .route("", web::get().to(blogs::list))
                    .route("", web::post().to(blogs::create))
                    .route("/{id}", web::get().to(blogs::get))
                    .route("/{id}", web::put().to(blogs::update))
                    .route("/{id}", web::delete().to(blogs::delete)),
            )
            .service(
                web::scope("/projects")
                    .route("", web::get().to(projects::list))
                    .route("", web::post().to(projects::create))
                    .route("/{id}", web::get().to(projects::get))
                    .route("/{id}", web::put().to(projects::update))
                    .route("/{id}", web::delete().to(projects::delete)),
            )
            .service(
                web::scope("/gallery")
                    .route("", web::get().to(gallery::list))
                    .route("", web::post().to(gallery::create))
                    .route("/{id}", web::get().to(gallery::get))
                    .route("/{id}", web::delete().to(gallery::delete)),
            ),
    );
}

/// Optional `?status=` filter shared by the blog and project collections.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    status: Option<String>,
}

impl ListQuery {
    /// Enum membership is checked at the boundary; an unknown value is a
    /// 400, not an empty result set.
    fn status(self) -> Result<Option<Status>, AppError> {
        match self.status {
            None => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(|_| {
                AppError::BadRequest("Invalid status filter: must be one of: draft, published".to_string())
            }),
        }
    }
}
