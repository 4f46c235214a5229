//! File storage implementations.

mod local;

pub use local::LocalFileStorage;
