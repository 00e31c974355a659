//! Reaction type - the closed set of reactions a user can leave on a comment

use std::fmt;

use crate::error::DomainError;

/// Reaction type for a comment
///
/// The numeric values are persisted in the database and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i16)]
pub enum ReactionType {
    Like = 1,
    Dislike = 2,
}

impl ReactionType {
    /// Numeric value as stored in the database
    #[inline]
    pub const fn value(self) -> i16 {
        self as i16
    }

    /// Symbolic name, matching the Display form
    pub const fn name(self) -> &'static str {
        match self {
            Self::Like => "LIKE",
            Self::Dislike => "DISLIKE",
        }
    }

    /// The counterpart reaction
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Like => Self::Dislike,
            Self::Dislike => Self::Like,
        }
    }

    /// Validate raw user input into a reaction type
    ///
    /// Accepts the symbolic name in any case ("like", "DISLIKE") or the
    /// numeric value rendered as a string ("1", "2"). Anything else is a
    /// validation error.
    pub fn clean(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "LIKE" => return Ok(Self::Like),
            "DISLIKE" => return Ok(Self::Dislike),
            _ => {}
        }
        if let Ok(value) = trimmed.parse::<i16>() {
            return Self::try_from(value);
        }
        Err(DomainError::InvalidReactionType(raw.to_string()))
    }
}

impl TryFrom<i16> for ReactionType {
    type Error = DomainError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Like),
            2 => Ok(Self::Dislike),
            other => Err(DomainError::InvalidReactionType(other.to_string())),
        }
    }
}

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_accepts_names() {
        assert_eq!(ReactionType::clean("LIKE").unwrap(), ReactionType::Like);
        assert_eq!(ReactionType::clean("dislike").unwrap(), ReactionType::Dislike);
        assert_eq!(ReactionType::clean(" Like ").unwrap(), ReactionType::Like);
    }

    #[test]
    fn test_clean_accepts_numeric_values() {
        assert_eq!(ReactionType::clean("1").unwrap(), ReactionType::Like);
        assert_eq!(ReactionType::clean("2").unwrap(), ReactionType::Dislike);
    }

    #[test]
    fn test_clean_rejects_invalid_input() {
        // plural of a valid name is still invalid
        assert!(ReactionType::clean("likes").unwrap_err().is_validation());
        assert!(ReactionType::clean("0").unwrap_err().is_validation());
        assert!(ReactionType::clean("3").unwrap_err().is_validation());
        assert!(ReactionType::clean("-1").unwrap_err().is_validation());
        assert!(ReactionType::clean("").unwrap_err().is_validation());
    }

    #[test]
    fn test_try_from_value() {
        assert_eq!(ReactionType::try_from(1).unwrap(), ReactionType::Like);
        assert_eq!(ReactionType::try_from(2).unwrap(), ReactionType::Dislike);
        assert!(ReactionType::try_from(99).is_err());
    }

    #[test]
    fn test_opposite() {
        assert_eq!(ReactionType::Like.opposite(), ReactionType::Dislike);
        assert_eq!(ReactionType::Dislike.opposite(), ReactionType::Like);
    }
}
