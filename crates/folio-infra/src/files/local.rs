//! Local-disk file storage - a development stand-in for an object storage
//! service.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use uuid::Uuid;

use folio_core::ports::{FileStorage, FileStorageError};

/// Writes uploads under a local directory and serves them from a configured
/// public base URL. No retry policy; callers treat failures as opaque.
pub struct LocalFileStorage {
    root: PathBuf,
    public_base_url: String,
}

impl LocalFileStorage {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into(),
        }
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn store(&self, filename: &str, bytes: &[u8]) -> Result<String, FileStorageError> {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("bin");
        let name = format!("{}.{}", Uuid::new_v4(), ext);

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| FileStorageError::Io(e.to_string()))?;
        tokio::fs::write(self.root.join(&name), bytes)
            .await
            .map_err(|e| FileStorageError::Io(e.to_string()))?;

        tracing::debug!(file = %name, "upload stored");
        Ok(format!(
            "{}/{}",
            self.public_base_url.trim_end_matches('/'),
            name
        ))
    }
}
