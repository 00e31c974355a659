//! Flag entities - per-comment moderation aggregate and per-user instances

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{FlagReason, Snowflake};

/// Flag aggregate, paired 1:1 with a comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    pub id: Snowflake,
    pub comment_id: Snowflake,
    /// Number of live flag instances
    pub count: i32,
}

impl Flag {
    /// Create a fresh aggregate with zero count
    pub fn new(id: Snowflake, comment_id: Snowflake) -> Self {
        Self {
            id,
            comment_id,
            count: 0,
        }
    }

    /// Whether the comment has collected enough flags to be hidden
    ///
    /// `flags_allowed` is read at evaluation time, never cached: a threshold
    /// of zero or less disables the feature entirely.
    #[inline]
    pub fn is_flagged(&self, flags_allowed: i32) -> bool {
        flags_allowed > 0 && self.count >= flags_allowed
    }
}

/// A single user's flag on a comment
///
/// At most one instance exists per (flag, user) pair. `info` is only
/// meaningful when `reason` is the catch-all reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagInstance {
    pub id: Snowflake,
    pub flag_id: Snowflake,
    pub user_id: Snowflake,
    pub reason: FlagReason,
    pub info: Option<String>,
    pub flagged_at: DateTime<Utc>,
}

impl FlagInstance {
    /// Create a new instance
    pub fn new(
        id: Snowflake,
        flag_id: Snowflake,
        user_id: Snowflake,
        reason: FlagReason,
        info: Option<String>,
    ) -> Self {
        Self {
            id,
            flag_id,
            user_id,
            reason,
            info,
            flagged_at: Utc::now(),
        }
    }
}

/// Outcome of a set-flag toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagOutcome {
    /// An instance was created
    Flagged,
    /// The user's existing instance was removed
    Unflagged,
}

/// Validate a raw (reason, info) flag request
///
/// The reason is required. The catch-all reason requires non-blank info;
/// every other reason discards info even when supplied.
pub fn clean_flag_request(
    reason: Option<&str>,
    info: Option<&str>,
) -> Result<(FlagReason, Option<String>), DomainError> {
    let raw = reason.ok_or(DomainError::MissingFlagReason)?;
    let reason = FlagReason::clean(raw)?;

    if reason.requires_info() {
        match info.map(str::trim) {
            Some(text) if !text.is_empty() => Ok((reason, Some(text.to_string()))),
            _ => Err(DomainError::MissingFlagInfo),
        }
    } else {
        Ok((reason, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_flagged_threshold_math() {
        let mut flag = Flag::new(Snowflake::new(1), Snowflake::new(2));
        assert!(!flag.is_flagged(1));

        flag.count = 1;
        assert!(flag.is_flagged(1));
        assert!(!flag.is_flagged(2));

        flag.count = 2;
        assert!(flag.is_flagged(2));

        // count back to zero reverts the state
        flag.count = 0;
        assert!(!flag.is_flagged(2));
    }

    #[test]
    fn test_is_flagged_disabled_when_threshold_not_positive() {
        let flag = Flag {
            id: Snowflake::new(1),
            comment_id: Snowflake::new(2),
            count: 100,
        };
        assert!(!flag.is_flagged(0));
        assert!(!flag.is_flagged(-5));
    }

    #[test]
    fn test_clean_requires_reason() {
        let err = clean_flag_request(None, Some("details")).unwrap_err();
        assert!(matches!(err, DomainError::MissingFlagReason));
    }

    #[test]
    fn test_clean_rejects_unknown_reason() {
        assert!(clean_flag_request(Some("abcd"), None).unwrap_err().is_validation());
        assert!(clean_flag_request(Some("-1"), None).unwrap_err().is_validation());
    }

    #[test]
    fn test_clean_discards_info_for_ordinary_reasons() {
        let (reason, info) = clean_flag_request(Some("1"), Some("Hi")).unwrap();
        assert_eq!(reason, FlagReason::Spam);
        assert!(info.is_none());
    }

    #[test]
    fn test_clean_requires_info_for_catch_all() {
        let err = clean_flag_request(Some("100"), None).unwrap_err();
        assert!(matches!(err, DomainError::MissingFlagInfo));

        let err = clean_flag_request(Some("100"), Some("   ")).unwrap_err();
        assert!(matches!(err, DomainError::MissingFlagInfo));

        let (reason, info) = clean_flag_request(Some("100"), Some("details here")).unwrap();
        assert_eq!(reason, FlagReason::Something);
        assert_eq!(info.as_deref(), Some("details here"));
    }
}
