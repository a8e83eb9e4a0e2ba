//! Structured-output schema sent alongside each prompt.
//!
//! Serializes to the OpenAPI-subset shape the generative service accepts
//! (`type`, `properties`, `required`, `items`, `enum`, `description`) and
//! doubles as the contract the generation client validates replies against.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Primitive type of a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    Object,
    Array,
    String,
    Integer,
    Boolean,
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SchemaType::Object => "object",
            SchemaType::Array => "array",
            SchemaType::String => "string",
            SchemaType::Integer => "integer",
            SchemaType::Boolean => "boolean",
        };
        f.write_str(s)
    }
}

/// One node of a response schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSchema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub properties: BTreeMap<String, ResponseSchema>,

    /// Declaration order of `properties`, so replies come back in reading order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub property_ordering: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub required: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<ResponseSchema>>,

    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

impl ResponseSchema {
    fn of(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            description: None,
            properties: BTreeMap::new(),
            property_ordering: Vec::new(),
            required: Vec::new(),
            items: None,
            enum_values: None,
        }
    }

    pub fn object() -> Self {
        Self::of(SchemaType::Object)
    }

    pub fn string() -> Self {
        Self::of(SchemaType::String)
    }

    pub fn integer() -> Self {
        Self::of(SchemaType::Integer)
    }

    pub fn boolean() -> Self {
        Self::of(SchemaType::Boolean)
    }

    pub fn array(items: ResponseSchema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::of(SchemaType::Array)
        }
    }

    /// A string restricted to a fixed set of values.
    pub fn string_enum(values: &[&str]) -> Self {
        Self {
            enum_values: Some(values.iter().map(|v| v.to_string()).collect()),
            ..Self::of(SchemaType::String)
        }
    }

    /// Array of strings, the most common list shape.
    pub fn string_list() -> Self {
        Self::array(Self::string())
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a property that must be present in the reply.
    pub fn required_property(mut self, name: &str, schema: ResponseSchema) -> Self {
        self.property_ordering.push(name.to_string());
        self.required.push(name.to_string());
        self.properties.insert(name.to_string(), schema);
        self
    }

    /// True when this node is an object or an array of objects.
    pub fn is_structured(&self) -> bool {
        match self.schema_type {
            SchemaType::Object => true,
            SchemaType::Array => self
                .items
                .as_ref()
                .is_some_and(|i| i.schema_type == SchemaType::Object),
            _ => false,
        }
    }

    /// Required fields of this node, or of its items for an array.
    pub fn required_fields(&self) -> &[String] {
        match (&self.schema_type, &self.items) {
            (SchemaType::Array, Some(items)) => &items.required,
            _ => &self.required,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_schema_serializes_in_service_shape() {
        let schema = ResponseSchema::object()
            .required_property("objective", ResponseSchema::string().describe("Goal"))
            .required_property("constraints", ResponseSchema::string_list());

        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "OBJECT",
                "properties": {
                    "objective": {"type": "STRING", "description": "Goal"},
                    "constraints": {"type": "ARRAY", "items": {"type": "STRING"}}
                },
                "propertyOrdering": ["objective", "constraints"],
                "required": ["objective", "constraints"]
            })
        );
    }

    #[test]
    fn enum_serializes_under_enum_key() {
        let value = serde_json::to_value(ResponseSchema::string_enum(&["A", "B"])).unwrap();
        assert_eq!(value, json!({"type": "STRING", "enum": ["A", "B"]}));
    }

    #[test]
    fn structured_shapes() {
        let obj = ResponseSchema::object().required_property("a", ResponseSchema::boolean());
        assert!(obj.is_structured());
        assert!(ResponseSchema::array(obj.clone()).is_structured());
        assert!(!ResponseSchema::string_list().is_structured());
        assert_eq!(ResponseSchema::array(obj).required_fields(), ["a".to_string()]);
    }
}
