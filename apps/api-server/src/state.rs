//! Application state - shared across all handlers.

use std::sync::Arc;

use folio_core::domain::{BlogPost, GalleryImage, Project};
use folio_core::ports::EntityStore;
use folio_infra::store::MemoryStore;

/// Shared application state: one store handle per entity kind, constructed
/// at process start and handed to handlers explicitly. No process-global
/// store exists; tests build isolated instances.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn EntityStore<BlogPost>>,
    pub projects: Arc<dyn EntityStore<Project>>,
    pub gallery: Arc<dyn EntityStore<GalleryImage>>,
}

impl AppState {
    /// Build the application state with in-memory stores.
    pub fn new() -> Self {
        Self {
            blogs: Arc::new(MemoryStore::new()),
            projects: Arc::new(MemoryStore::new()),
            gallery: Arc::new(MemoryStore::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
