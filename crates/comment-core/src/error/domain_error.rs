//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Comment not found: {0}")]
    CommentNotFound(Snowflake),

    #[error("Reaction not found for comment: {0}")]
    ReactionNotFound(Snowflake),

    #[error("Flag not found for comment: {0}")]
    FlagNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid reaction type: {0}")]
    InvalidReactionType(String),

    #[error("Invalid flag reason: {0}")]
    InvalidFlagReason(String),

    #[error("Flag reason is required")]
    MissingFlagReason,

    #[error("Flag info is required for this reason")]
    MissingFlagInfo,

    #[error("Comment is already flagged by this user")]
    AlreadyFlagged,

    #[error("Comment was not flagged by this user")]
    NotFlagged,

    // =========================================================================
    // Conflict Errors (uniqueness violations)
    // =========================================================================
    #[error("Reaction instance already exists for this user")]
    ReactionAlreadyExists,

    #[error("Flag instance already exists for this user")]
    FlagAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::ReactionNotFound(_) => "UNKNOWN_REACTION",
            Self::FlagNotFound(_) => "UNKNOWN_FLAG",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidReactionType(_) => "INVALID_REACTION_TYPE",
            Self::InvalidFlagReason(_) => "INVALID_FLAG_REASON",
            Self::MissingFlagReason => "MISSING_FLAG_REASON",
            Self::MissingFlagInfo => "MISSING_FLAG_INFO",
            Self::AlreadyFlagged => "ALREADY_FLAGGED",
            Self::NotFlagged => "NOT_FLAGGED",

            // Conflict
            Self::ReactionAlreadyExists => "REACTION_ALREADY_EXISTS",
            Self::FlagAlreadyExists => "FLAG_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::CommentNotFound(_) | Self::ReactionNotFound(_) | Self::FlagNotFound(_)
        )
    }

    /// Check if this is a validation error
    ///
    /// Flagging twice and unflagging a never-flagged comment are validation
    /// errors on purpose: the original system reports them through the same
    /// channel as a bad reason code.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidReactionType(_)
                | Self::InvalidFlagReason(_)
                | Self::MissingFlagReason
                | Self::MissingFlagInfo
                | Self::AlreadyFlagged
                | Self::NotFlagged
        )
    }

    /// Check if this is a conflict (uniqueness) error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ReactionAlreadyExists | Self::FlagAlreadyExists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::CommentNotFound(Snowflake::new(1));
        assert_eq!(err.code(), "UNKNOWN_COMMENT");

        let err = DomainError::InvalidReactionType("likes".to_string());
        assert_eq!(err.code(), "INVALID_REACTION_TYPE");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::CommentNotFound(Snowflake::new(1)).is_not_found());
        assert!(!DomainError::AlreadyFlagged.is_not_found());
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::InvalidFlagReason("-1".to_string()).is_validation());
        assert!(DomainError::MissingFlagInfo.is_validation());
        // both toggle misuses classify as validation, like the bad-reason case
        assert!(DomainError::AlreadyFlagged.is_validation());
        assert!(DomainError::NotFlagged.is_validation());
        assert!(!DomainError::FlagAlreadyExists.is_validation());
    }

    #[test]
    fn test_is_conflict() {
        assert!(DomainError::ReactionAlreadyExists.is_conflict());
        assert!(DomainError::FlagAlreadyExists.is_conflict());
        assert!(!DomainError::NotFlagged.is_conflict());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::CommentNotFound(Snowflake::new(123));
        assert_eq!(err.to_string(), "Comment not found: 123");

        let err = DomainError::MissingFlagInfo;
        assert_eq!(err.to_string(), "Flag info is required for this reason");
    }
}
