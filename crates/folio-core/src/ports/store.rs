use async_trait::async_trait;

use crate::domain::{Status, StoredEntity};
use crate::error::StoreError;

/// Generic keyed-record repository, one collection per entity kind.
///
/// Absent identifiers are ordinary outcomes, not errors: `get` and `update`
/// return `None`, and `delete` returns `false` for an unknown id.
#[async_trait]
pub trait EntityStore<T: StoredEntity>: Send + Sync {
    /// List records, optionally filtered by exact status match.
    /// Ordering is unspecified; callers needing order must sort.
    async fn list(&self, status: Option<Status>) -> Result<Vec<T>, StoreError>;

    /// Look up a record by identifier.
    async fn get(&self, id: &str) -> Result<Option<T>, StoreError>;

    /// Persist a new record, assigning a fresh identifier and timestamps.
    async fn create(&self, payload: T::Create) -> Result<T, StoreError>;

    /// Merge a partial payload onto an existing record. Returns `None`
    /// when the identifier does not exist; no upsert.
    async fn update(&self, id: &str, patch: T::Patch) -> Result<Option<T>, StoreError>;

    /// Remove a record, reporting whether one was actually removed.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
}
