//! Store-level error types.

use thiserror::Error;

/// Errors surfaced by an entity store backend.
///
/// Lookup misses are not errors: `get` and `update` return `Option`, and
/// `delete` reports whether a record was removed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store backend failure: {0}")]
    Backend(String),
}
