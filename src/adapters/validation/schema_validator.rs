//! Response Schema Validator - Implementation of ResponseValidator.
//!
//! Walks a parsed reply alongside its `ResponseSchema`, checking required
//! fields and primitive types at every level. Enum membership and numeric
//! ranges are left to the typed decode that follows.

use serde_json::{Map, Value};

use crate::domain::prompts::{ResponseSchema, SchemaType};
use crate::ports::{ResponseValidator, SchemaValidationError};

const ROOT: &str = "root";

/// Structural validator for generated JSON.
///
/// Stateless; `Send + Sync` and cheap to share.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseSchemaValidator;

impl ResponseSchemaValidator {
    pub fn new() -> Self {
        Self
    }

    fn validate_node(
        &self,
        schema: &ResponseSchema,
        value: &Value,
        path: &str,
        errors: &mut Vec<SchemaValidationError>,
    ) {
        match schema.schema_type {
            SchemaType::Object => match self.require_object(value, path) {
                Ok(obj) => self.validate_properties(schema, obj, path, errors),
                Err(e) => errors.push(e),
            },
            SchemaType::Array => match value.as_array() {
                Some(items) => {
                    if let Some(item_schema) = &schema.items {
                        for (i, item) in items.iter().enumerate() {
                            let item_path = format!("{}[{}]", path, i);
                            self.validate_node(item_schema, item, &item_path, errors);
                        }
                    }
                }
                None => errors.push(Self::type_error(path, "array", value)),
            },
            SchemaType::String => {
                if !value.is_string() {
                    errors.push(Self::type_error(path, "string", value));
                }
            }
            SchemaType::Integer => {
                if !(value.is_i64() || value.is_u64()) {
                    errors.push(Self::type_error(path, "integer", value));
                }
            }
            SchemaType::Boolean => {
                if !value.is_boolean() {
                    errors.push(Self::type_error(path, "boolean", value));
                }
            }
        }
    }

    fn validate_properties(
        &self,
        schema: &ResponseSchema,
        obj: &Map<String, Value>,
        path: &str,
        errors: &mut Vec<SchemaValidationError>,
    ) {
        for field in &schema.required {
            if let Err(e) = self.require_field(obj, field, path) {
                errors.push(e);
            }
        }

        for (name, property) in &schema.properties {
            if let Some(val) = obj.get(name) {
                self.validate_node(property, val, &Self::child_path(path, name), errors);
            }
        }
    }

    fn require_object<'a>(
        &self,
        value: &'a Value,
        path: &str,
    ) -> Result<&'a Map<String, Value>, SchemaValidationError> {
        value
            .as_object()
            .ok_or_else(|| Self::type_error(path, "object", value))
    }

    fn require_field(
        &self,
        obj: &Map<String, Value>,
        field: &str,
        parent: &str,
    ) -> Result<(), SchemaValidationError> {
        if obj.contains_key(field) {
            Ok(())
        } else {
            Err(SchemaValidationError::missing(Self::child_path(parent, field)))
        }
    }

    fn child_path(parent: &str, field: &str) -> String {
        if parent == ROOT {
            field.to_string()
        } else {
            format!("{}.{}", parent, field)
        }
    }

    fn type_error(path: &str, expected: &str, value: &Value) -> SchemaValidationError {
        SchemaValidationError::invalid_type(path, expected, Self::type_name(value))
    }

    fn type_name(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(n) if n.is_f64() => "number",
            Value::Number(_) => "integer",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    fn collect_errors(mut errors: Vec<SchemaValidationError>) -> Result<(), SchemaValidationError> {
        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(SchemaValidationError::Multiple(errors)),
        }
    }
}

impl ResponseValidator for ResponseSchemaValidator {
    fn validate(&self, schema: &ResponseSchema, value: &Value) -> Result<(), SchemaValidationError> {
        let mut errors = Vec::new();
        self.validate_node(schema, value, ROOT, &mut errors);
        Self::collect_errors(errors)
    }
}
