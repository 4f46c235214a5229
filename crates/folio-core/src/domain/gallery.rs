use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Status, StoredEntity};

/// An image in the gallery. The URL points at wherever the file-storage
/// collaborator put the bytes; the store only keeps the reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: String,
    pub name: String,
    pub url: String,
    pub upload_date: DateTime<Utc>,
}

/// Validated payload for registering a gallery image.
#[derive(Debug, Clone)]
pub struct NewGalleryImage {
    pub name: String,
    pub url: String,
}

/// Partial update for a gallery image. `uploadDate` is set once at
/// creation and has no counterpart here.
#[derive(Debug, Clone, Default)]
pub struct GalleryPatch {
    pub name: Option<String>,
    pub url: Option<String>,
}

impl StoredEntity for GalleryImage {
    type Create = NewGalleryImage;
    type Patch = GalleryPatch;

    const KIND: &'static str = "gallery";

    fn from_create(id: String, payload: NewGalleryImage, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: payload.name,
            url: payload.url,
            upload_date: now,
        }
    }

    fn apply_patch(&mut self, patch: GalleryPatch, _now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(url) = patch.url {
            self.url = url;
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> Option<Status> {
        None
    }
}
