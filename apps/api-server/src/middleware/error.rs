//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use rotta_core::error::DomainError;
use rotta_shared::ErrorResponse;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Slot taken: {0}")]
    SlotTaken(String),
    #[error("Generation failed: {0}")]
    Generation(String),
    #[error("Copy failed: {0}")]
    CopyFailed(String),
    #[error("Share failed: {0}")]
    ShareFailed(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::SlotTaken(_) => StatusCode::CONFLICT,
            AppError::Generation(_) => StatusCode::BAD_GATEWAY,
            AppError::CopyFailed(_) | AppError::ShareFailed(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::SlotTaken(detail) => ErrorResponse::slot_taken(detail),
            AppError::Generation(detail) => ErrorResponse::generation_failed(detail),
            AppError::CopyFailed(detail) => ErrorResponse::copy_failed(detail),
            AppError::ShareFailed(detail) => ErrorResponse::share_failed(detail),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        if err.is_recoverable() {
            tracing::warn!(error = %err, "Pipeline step failed");
        }

        match err {
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::SlotTaken(slot) => AppError::SlotTaken(slot.to_string()),
            DomainError::Generation(e) => AppError::Generation(e.to_string()),
            DomainError::CopyFailed(msg) => AppError::CopyFailed(msg),
            DomainError::ShareFailed(msg) => AppError::ShareFailed(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
