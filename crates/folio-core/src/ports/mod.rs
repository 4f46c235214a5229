//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod files;
mod store;

pub use files::{FileStorage, FileStorageError};
pub use store::EntityStore;
