//! Application error types
//!
//! Unified error handling above the domain layer.

use comment_core::DomainError;
use serde::Serialize;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Resource errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Resource already exists: {0}")]
    AlreadyExists(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) | Self::InvalidInput(_) => 400,
            Self::NotFound(_) => 404,
            Self::AlreadyExists(_) | Self::Conflict(_) => 409,
            Self::Database(_) | Self::Internal(_) | Self::Config(_) => 500,
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_validation() {
                    400
                } else if e.is_conflict() {
                    409
                } else {
                    500
                }
            }
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::AlreadyExists(_) => "ALREADY_EXISTS",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        let status = self.status_code();
        (400..500).contains(&status)
    }
}

/// Result type using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Serializable error body for API responses
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    /// Build a response body from an error
    pub fn from_error(error: &AppError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use comment_core::Snowflake;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::Validation("bad".into()).status_code(), 400);
        assert_eq!(AppError::NotFound("comment 1".into()).status_code(), 404);
        assert_eq!(AppError::Conflict("dup".into()).status_code(), 409);
        assert_eq!(AppError::Database("down".into()).status_code(), 500);
    }

    #[test]
    fn test_domain_errors_map_through() {
        let err = AppError::from(DomainError::CommentNotFound(Snowflake::new(1)));
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "UNKNOWN_COMMENT");

        let err = AppError::from(DomainError::AlreadyFlagged);
        assert_eq!(err.status_code(), 400);

        let err = AppError::from(DomainError::ReactionAlreadyExists);
        assert_eq!(err.status_code(), 409);
    }

    #[test]
    fn test_is_client_error() {
        assert!(AppError::InvalidInput("x".into()).is_client_error());
        assert!(!AppError::Database("x".into()).is_client_error());
    }

    #[test]
    fn test_error_response_body() {
        let body = ErrorResponse::from_error(&AppError::Validation("missing reason".into()));
        assert_eq!(body.code, "VALIDATION_ERROR");
        assert!(body.message.contains("missing reason"));
    }
}
