//! Application error type - translates the error taxonomy into the uniform
//! response envelope.

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use folio_core::StoreError;
use folio_shared::{ApiResponse, FieldError};

/// Handler-level errors. Every variant renders as a `success: false`
/// envelope; no raw error body reaches the transport.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Validation {
        message: String,
        errors: Vec<FieldError>,
    },
    Internal(String),
}

impl AppError {
    pub fn validation(message: &str, errors: Vec<FieldError>) -> Self {
        AppError::Validation {
            message: message.to_string(),
            errors,
        }
    }

    /// Wrap a store failure: the detail goes to the log, the caller sees
    /// only the generic operation message.
    pub fn store(message: &str, err: StoreError) -> Self {
        tracing::error!("{}: {}", message, err);
        AppError::Internal(message.to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Validation { message, errors } => {
                write!(f, "{} ({} field errors)", message, errors.len())
            }
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound(message) | AppError::BadRequest(message) => {
                ApiResponse::failure(message.clone())
            }
            AppError::Validation { message, errors } => {
                ApiResponse::validation_failure(message.clone(), errors.clone())
            }
            // Internal messages are already generic; detail was logged at
            // the point of failure.
            AppError::Internal(message) => ApiResponse::failure(message.clone()),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
