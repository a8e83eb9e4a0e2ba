//! Prompt and schema generation for the four stages.

mod requests;
mod schema;
mod schemas;

pub use requests::{
    assumptions_request, recommendation_request, scenarios_request, structure_request,
    GenerationRequest,
};
pub use schema::{ResponseSchema, SchemaType};
pub use schemas::{ASSUMPTIONS_SCHEMA, RECOMMENDATION_SCHEMA, SCENARIOS_SCHEMA, STRUCTURE_SCHEMA};
