//! Schema Validator Port - Response shape validation interface.
//!
//! The generation client depends on this trait to check a parsed reply
//! against the schema it was requested with, before any typed decoding.

use serde_json::Value;
use thiserror::Error;

use crate::domain::prompts::ResponseSchema;

/// Port for validating generated JSON against a response schema.
///
/// # Contract
///
/// Implementations must:
/// - Reject a reply missing any field the schema lists as required
/// - Reject a value whose JSON type differs from the declared type
/// - Recurse into object properties and array items
/// - Never coerce (a `"42"` string is not an integer)
pub trait ResponseValidator: Send + Sync {
    fn validate(&self, schema: &ResponseSchema, value: &Value) -> Result<(), SchemaValidationError>;
}

/// Errors that can occur during schema validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaValidationError {
    #[error("Missing required field: {field}")]
    MissingRequired { field: String },

    #[error("Invalid type for field {field}: expected {expected}, got {actual}")]
    InvalidType {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("Validation errors: {0:?}")]
    Multiple(Vec<SchemaValidationError>),
}

impl SchemaValidationError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingRequired {
            field: field.into(),
        }
    }

    pub fn invalid_type(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::InvalidType {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Returns true if this error contains multiple validation failures.
    pub fn is_multiple(&self) -> bool {
        matches!(self, SchemaValidationError::Multiple(_))
    }

    /// Get the count of validation errors.
    pub fn error_count(&self) -> usize {
        match self {
            SchemaValidationError::Multiple(errors) => errors.len(),
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_displays_field_name() {
        let err = SchemaValidationError::missing("successCriteria");
        assert_eq!(err.to_string(), "Missing required field: successCriteria");
    }

    #[test]
    fn invalid_type_displays_expected_and_actual() {
        let err = SchemaValidationError::invalid_type("confidenceScore", "integer", "string");
        assert!(err.to_string().contains("expected integer"));
        assert!(err.to_string().contains("got string"));
    }

    #[test]
    fn error_count() {
        assert_eq!(SchemaValidationError::missing("a").error_count(), 1);
        let multi = SchemaValidationError::Multiple(vec![
            SchemaValidationError::missing("a"),
            SchemaValidationError::missing("b"),
        ]);
        assert!(multi.is_multiple());
        assert_eq!(multi.error_count(), 2);
    }
}
