//! Error types for S10 parsing, validation, and generation.

use thiserror::Error;

/// Errors that can occur when parsing, validating, or generating S10 identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum S10Error {
    /// The candidate identifier is malformed (wrong length or wrong character class).
    #[error("invalid S10 identifier '{input}': {reason}")]
    Format { input: String, reason: String },

    /// A serial number does not fit in 8 digits.
    #[error("serial number {value} exceeds the 8-digit capacity ({max})")]
    OutOfRange { value: u128, max: u32 },

    /// A serial body or field code is not well formed.
    #[error("invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    /// The engine configuration cannot produce identifiers.
    #[error("invalid engine configuration: {message}")]
    Config { message: String },
}

impl S10Error {
    pub(crate) fn format(input: &str, reason: impl Into<String>) -> Self {
        Self::Format {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_input(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns true if this error indicates a malformed identifier.
    pub fn is_format_error(&self) -> bool {
        matches!(self, S10Error::Format { .. })
    }

    /// Returns true if this error indicates serial capacity was exceeded.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, S10Error::OutOfRange { .. })
    }

    /// Returns true if this error indicates a malformed serial body or field code.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, S10Error::InvalidInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_match_variants() {
        assert!(S10Error::format("x", "too short").is_format_error());
        assert!(S10Error::OutOfRange {
            value: 100_000_000,
            max: 99_999_999
        }
        .is_out_of_range());
        assert!(S10Error::invalid_input("12", "need 8 digits").is_invalid_input());
        assert!(!S10Error::invalid_input("12", "need 8 digits").is_format_error());
    }

    #[test]
    fn messages_name_the_input() {
        let err = S10Error::format("RA12", "expected 13 characters, got 4");
        assert_eq!(
            err.to_string(),
            "invalid S10 identifier 'RA12': expected 13 characters, got 4"
        );
    }
}
