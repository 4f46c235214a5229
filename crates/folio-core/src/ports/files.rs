use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileStorageError {
    #[error("File write failed: {0}")]
    Io(String),
}

/// Object-storage collaborator for gallery uploads: accepts a binary,
/// returns a public URL. Availability and retry policy belong to the
/// implementation, not to this interface.
#[async_trait]
pub trait FileStorage: Send + Sync {
    async fn store(&self, filename: &str, bytes: &[u8]) -> Result<String, FileStorageError>;
}
