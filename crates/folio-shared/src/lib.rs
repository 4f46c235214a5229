//! # Folio Shared
//!
//! API surface types shared between the server and any Rust client:
//! the response envelope and the request DTOs with their validation pass.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, FieldError};
