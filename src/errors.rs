// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Each variant maps to one HTTP status code and error code
#[derive(Error, Debug)]
pub enum PhotosError {
    #[error("{0}")]
    NotFound(String),

    /// Photo row exists but its file is gone from storage
    #[error("{0}")]
    Gone(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Forbidden access")]
    Forbidden,

    #[error("Internal server error")]
    InternalError,
}

impl PhotosError {
    fn error_code(&self) -> &'static str {
        match self {
            PhotosError::NotFound(_) => "NOT_FOUND",
            PhotosError::Gone(_) => "GONE",
            PhotosError::DatabaseError(_) => "DATABASE_ERROR",
            PhotosError::StorageError(_) => "STORAGE_ERROR",
            PhotosError::InvalidInput(_) => "INVALID_INPUT",
            PhotosError::ValidationError(_) => "VALIDATION_ERROR",
            PhotosError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            PhotosError::Unauthorized => "UNAUTHORIZED",
            PhotosError::Forbidden => "FORBIDDEN",
            PhotosError::InternalError => "INTERNAL_ERROR",
        }
    }
}

/// Convert PhotosError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for PhotosError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            PhotosError::NotFound(_) => StatusCode::NOT_FOUND,
            PhotosError::Gone(_) => StatusCode::GONE,
            PhotosError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PhotosError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PhotosError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            PhotosError::ValidationError(_) => StatusCode::BAD_REQUEST,
            PhotosError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            PhotosError::Unauthorized => StatusCode::UNAUTHORIZED,
            PhotosError::Forbidden => StatusCode::FORBIDDEN,
            PhotosError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
