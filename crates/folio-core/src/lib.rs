//! # Folio Core
//!
//! The domain layer of the Folio content backend.
//! This crate contains entity types and port traits with zero infrastructure
//! dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::StoreError;
