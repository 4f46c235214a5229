//! Folio API server library surface, shared by the binary and the
//! integration tests.

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

use actix_web::web;

use error::AppError;

/// Malformed JSON bodies get the uniform envelope too, not actix's default
/// error body.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}
