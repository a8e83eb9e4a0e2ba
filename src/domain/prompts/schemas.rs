//! Response schemas for the four generation calls.

use once_cell::sync::Lazy;

use super::ResponseSchema;
use crate::domain::analysis::{AssumptionReliability, ScenarioTitle};

/// Object with objective, constraints, variables and success criteria.
pub static STRUCTURE_SCHEMA: Lazy<ResponseSchema> = Lazy::new(|| {
    ResponseSchema::object()
        .required_property(
            "objective",
            ResponseSchema::string()
                .describe("A single, clear sentence defining the primary goal of the decision."),
        )
        .required_property(
            "constraints",
            ResponseSchema::string_list().describe("A list of limitations or boundaries."),
        )
        .required_property(
            "variables",
            ResponseSchema::string_list().describe("A list of key factors or choices to be made."),
        )
        .required_property(
            "successCriteria",
            ResponseSchema::string_list().describe("A list of measurable outcomes for success."),
        )
});

/// Array of assumptions with reliability and a risky flag.
pub static ASSUMPTIONS_SCHEMA: Lazy<ResponseSchema> = Lazy::new(|| {
    ResponseSchema::array(
        ResponseSchema::object()
            .required_property(
                "assumption",
                ResponseSchema::string().describe("The implicit assumption being made."),
            )
            .required_property(
                "reliability",
                ResponseSchema::string_enum(&AssumptionReliability::WIRE_VALUES)
                    .describe("The reliability of the assumption."),
            )
            .required_property(
                "isRisky",
                ResponseSchema::boolean()
                    .describe("True if the decision's success hinges critically on this assumption."),
            ),
    )
});

/// Array of best/base/failure scenarios.
pub static SCENARIOS_SCHEMA: Lazy<ResponseSchema> = Lazy::new(|| {
    ResponseSchema::array(
        ResponseSchema::object()
            .required_property("title", ResponseSchema::string_enum(&ScenarioTitle::WIRE_VALUES))
            .required_property(
                "outcome",
                ResponseSchema::string()
                    .describe("A concise description of the final outcome in this scenario."),
            )
            .required_property(
                "timeImpact",
                ResponseSchema::string().describe("The likely impact on the timeline."),
            )
            .required_property(
                "effortCost",
                ResponseSchema::string().describe("The effort or opportunity cost involved."),
            )
            .required_property(
                "recoveryStrategy",
                ResponseSchema::string().describe(
                    "A brief recovery strategy (most relevant for Failure Case, can be 'N/A' for others).",
                ),
            ),
    )
});

/// Object with the recommendation and its confidence.
pub static RECOMMENDATION_SCHEMA: Lazy<ResponseSchema> = Lazy::new(|| {
    ResponseSchema::object()
        .required_property(
            "primaryRecommendation",
            ResponseSchema::string().describe("The main, actionable advice."),
        )
        .required_property(
            "confidenceScore",
            ResponseSchema::integer().describe("A confidence score from 0 to 100."),
        )
        .required_property(
            "confidenceReasoning",
            ResponseSchema::string().describe("Why this level of confidence exists."),
        )
        .required_property(
            "changeFactors",
            ResponseSchema::string_list().describe("What could change the decision."),
        )
        .required_property(
            "reevaluationTimeline",
            ResponseSchema::string().describe("When to reconsider this decision."),
        )
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prompts::SchemaType;

    #[test]
    fn structure_requires_all_four_fields() {
        assert_eq!(
            STRUCTURE_SCHEMA.required,
            vec!["objective", "constraints", "variables", "successCriteria"]
        );
    }

    #[test]
    fn list_schemas_are_arrays_of_objects() {
        for schema in [&*ASSUMPTIONS_SCHEMA, &*SCENARIOS_SCHEMA] {
            assert_eq!(schema.schema_type, SchemaType::Array);
            assert!(schema.is_structured());
        }
        assert_eq!(SCENARIOS_SCHEMA.required_fields().len(), 5);
    }

    #[test]
    fn enums_come_from_domain_wire_values() {
        let items = ASSUMPTIONS_SCHEMA.items.as_ref().unwrap();
        assert_eq!(
            items.properties["reliability"].enum_values.as_deref(),
            Some(&["Strong".to_string(), "Medium".to_string(), "Weak".to_string()][..])
        );
    }

    #[test]
    fn confidence_score_is_integer() {
        assert_eq!(
            RECOMMENDATION_SCHEMA.properties["confidenceScore"].schema_type,
            SchemaType::Integer
        );
    }
}
