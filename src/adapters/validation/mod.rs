//! Validation Adapters - Schema validation implementations.
//!
//! Contains the structural validator for generated replies.

mod schema_validator;

pub use schema_validator::ResponseSchemaValidator;
