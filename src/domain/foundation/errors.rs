//! Error types for the domain layer.

use thiserror::Error;

/// Errors raised while constructing value objects or validating user input.
///
/// These are the "inline" errors of the console: they are shown next to the
/// offending field and never reach the console-level error banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{message}")]
    EmptyField { field: String, message: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error with a user-facing message.
    pub fn empty_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the field the error is attached to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}
