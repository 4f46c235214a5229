//! # Folio Infra
//!
//! Infrastructure implementations of the folio-core ports.

pub mod files;
pub mod store;
