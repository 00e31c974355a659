//! Flag reason - the closed set of reasons a comment can be reported for

use std::fmt;

use crate::error::DomainError;

/// Reason code attached to a flag instance
///
/// `Something` ("something else") is the catch-all reason and the only one
/// that carries free-text info. It must stay last in [`FlagReason::values`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i16)]
pub enum FlagReason {
    Spam = 1,
    Abuse = 2,
    Something = 100,
}

impl FlagReason {
    /// All valid reasons, in presentation order; the last one is the
    /// "something else" reason.
    pub const fn values() -> [Self; 3] {
        [Self::Spam, Self::Abuse, Self::Something]
    }

    /// Numeric value as stored in the database
    #[inline]
    pub const fn value(self) -> i16 {
        self as i16
    }

    /// Symbolic name, matching the Display form
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spam => "SPAM",
            Self::Abuse => "ABUSE",
            Self::Something => "SOMETHING",
        }
    }

    /// Whether this reason requires free-text info
    #[inline]
    pub const fn requires_info(self) -> bool {
        matches!(self, Self::Something)
    }

    /// Validate raw user input into a reason code
    ///
    /// Accepts the symbolic name in any case or the numeric value rendered
    /// as a string. Anything else is a validation error.
    pub fn clean(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "SPAM" => return Ok(Self::Spam),
            "ABUSE" => return Ok(Self::Abuse),
            "SOMETHING" => return Ok(Self::Something),
            _ => {}
        }
        if let Ok(value) = trimmed.parse::<i16>() {
            return Self::try_from(value);
        }
        Err(DomainError::InvalidFlagReason(raw.to_string()))
    }
}

impl TryFrom<i16> for FlagReason {
    type Error = DomainError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Spam),
            2 => Ok(Self::Abuse),
            100 => Ok(Self::Something),
            other => Err(DomainError::InvalidFlagReason(other.to_string())),
        }
    }
}

impl fmt::Display for FlagReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_end_with_catch_all() {
        let values = FlagReason::values();
        assert_eq!(values.last(), Some(&FlagReason::Something));
        assert!(values.last().unwrap().requires_info());
    }

    #[test]
    fn test_clean_accepts_names_and_values() {
        assert_eq!(FlagReason::clean("spam").unwrap(), FlagReason::Spam);
        assert_eq!(FlagReason::clean("ABUSE").unwrap(), FlagReason::Abuse);
        assert_eq!(FlagReason::clean("1").unwrap(), FlagReason::Spam);
        assert_eq!(FlagReason::clean("100").unwrap(), FlagReason::Something);
    }

    #[test]
    fn test_clean_rejects_invalid_input() {
        assert!(FlagReason::clean("-1").unwrap_err().is_validation());
        assert!(FlagReason::clean("abcd").unwrap_err().is_validation());
        assert!(FlagReason::clean("3").unwrap_err().is_validation());
        assert!(FlagReason::clean("").unwrap_err().is_validation());
    }

    #[test]
    fn test_only_catch_all_requires_info() {
        assert!(!FlagReason::Spam.requires_info());
        assert!(!FlagReason::Abuse.requires_info());
        assert!(FlagReason::Something.requires_info());
    }
}
