//! Error handling middleware - maps failures to HTTP responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_core::DomainError;
use blog_shared::ErrorResponse;

/// Application-level error type.
///
/// Only client errors carry a body (RFC 7807). Not-found and internal errors
/// answer with an empty body so no detail leaks to the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound => HttpResponse::NotFound().finish(),
            AppError::BadRequest(detail) => {
                HttpResponse::BadRequest().json(ErrorResponse::bad_request(detail))
            }
            AppError::Internal(detail) => {
                tracing::error!(error = %detail, "Internal error");
                HttpResponse::InternalServerError().finish()
            }
        }
    }
}

// Validation failures land on 500 too; callers cannot tell a missing title
// from a store outage.
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
