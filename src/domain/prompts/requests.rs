//! Prompt builders, one per wizard stage.
//!
//! Each builder is a pure function of the analysis state gathered so far
//! and the user's context. The prompt text is paired with the fixed schema
//! the reply must satisfy.

use crate::domain::analysis::{find_by_title, Assumption, DecisionStructure, Scenario, ScenarioTitle};
use crate::domain::session::UserContext;
use crate::domain::wizard::WizardStage;

use super::schemas::{ASSUMPTIONS_SCHEMA, RECOMMENDATION_SCHEMA, SCENARIOS_SCHEMA, STRUCTURE_SCHEMA};
use super::ResponseSchema;

/// Text shown in place of a scenario the model did not return.
const NOT_SIMULATED: &str = "not simulated";

/// A prompt plus the structured-output schema its reply must match.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub stage: WizardStage,
    pub prompt: String,
    pub schema: ResponseSchema,
}

impl GenerationRequest {
    pub fn new(stage: WizardStage, prompt: impl Into<String>, schema: ResponseSchema) -> Self {
        Self {
            stage,
            prompt: prompt.into(),
            schema,
        }
    }

    /// True when there is nothing to send.
    pub fn is_blank(&self) -> bool {
        self.prompt.trim().is_empty()
    }
}

/// Stage 1: break the decision into objective, constraints, variables and criteria.
pub fn structure_request(decision: &str, user: &UserContext) -> GenerationRequest {
    let prompt = format!(
        "Based on the following user context and decision, structure the decision-making process.\n\
         User Context:\n\
         - Role: {role}\n\
         - Primary Goal: {goal}\n\
         - Time Horizon: {horizon}\n\
         \n\
         Decision: \"{decision}\"\n\
         \n\
         Structure this decision by defining a clear objective, identifying key constraints \
         (what must be avoided or preserved), listing the main variables (factors that can be \
         changed or chosen), and establishing success criteria (how to measure a successful \
         outcome). Be concise and analytical.",
        role = user.role(),
        goal = user.goal(),
        horizon = user.time_horizon(),
        decision = decision.trim(),
    );

    GenerationRequest::new(WizardStage::Structuring, prompt, STRUCTURE_SCHEMA.clone())
}

/// Stage 2: surface the implicit assumptions behind the structure.
pub fn assumptions_request(structure: &DecisionStructure, user: &UserContext) -> GenerationRequest {
    let prompt = format!(
        "Given the following decision structure and user context, identify the key implicit \
         assumptions being made.\n\
         User Context:\n\
         - Role: {role}\n\
         - Goal: {goal}\n\
         - Time Horizon: {horizon}\n\
         \n\
         {structure}\n\
         \n\
         For each assumption, rate its reliability as 'Strong', 'Medium', or 'Weak'. An \
         assumption is weak if it is unproven, highly uncertain, or dependent on many external \
         factors. Also, identify if the assumption is risky (isRisky: true) meaning the entire \
         decision fails if this assumption is wrong.",
        role = user.role(),
        goal = user.goal(),
        horizon = user.time_horizon(),
        structure = structure_block(structure),
    );

    GenerationRequest::new(WizardStage::Assumptions, prompt, ASSUMPTIONS_SCHEMA.clone())
}

/// Stage 3: simulate best, base and failure cases.
pub fn scenarios_request(
    structure: &DecisionStructure,
    assumptions: &[Assumption],
    user: &UserContext,
) -> GenerationRequest {
    let listed = assumptions
        .iter()
        .map(|a| format!("- {} (Reliability: {}, Risky: {})", a.text, a.reliability, a.is_risky))
        .collect::<Vec<_>>()
        .join("\n");

    let prompt = format!(
        "Based on the decision structure and identified assumptions, simulate three scenarios: \
         Best Case, Base Case, and Failure Case.\n\
         User Context:\n\
         - Role: {role}\n\
         - Goal: {goal}\n\
         \n\
         Decision Structure:\n\
         - Objective: {objective}\n\
         \n\
         Key Assumptions (especially risky/weak ones):\n\
         {listed}\n\
         \n\
         For each case (Best, Base, Failure), provide a concise description of the outcome, the \
         time impact, the effort/opportunity cost, and a potential recovery strategy for the \
         failure case.",
        role = user.role(),
        goal = user.goal(),
        objective = structure.objective,
        listed = listed,
    );

    GenerationRequest::new(WizardStage::Scenarios, prompt, SCENARIOS_SCHEMA.clone())
}

/// Stage 4: synthesize everything into a recommendation.
///
/// Only risky or weak assumptions are passed along.
pub fn recommendation_request(
    structure: &DecisionStructure,
    assumptions: &[Assumption],
    scenarios: &[Scenario],
    user: &UserContext,
) -> GenerationRequest {
    let listed = assumptions
        .iter()
        .filter(|a| a.needs_attention())
        .map(|a| format!("- {} (Reliability: {})", a.text, a.reliability))
        .collect::<Vec<_>>()
        .join("\n");

    let outcomes = ScenarioTitle::ORDER
        .iter()
        .map(|&title| {
            let outcome = find_by_title(scenarios, title)
                .map(|s| s.outcome.as_str())
                .unwrap_or(NOT_SIMULATED);
            format!("- {}: {}", title, outcome)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let prompt = format!(
        "Synthesize all the provided information to generate a final recommendation for the \
         user. Be analytical, calm, and practical.\n\
         User Context:\n\
         - Name: {name}\n\
         - Role: {role}\n\
         - Goal: {goal}\n\
         - Time Horizon: {horizon}\n\
         \n\
         Decision Structure:\n\
         - Objective: {objective}\n\
         \n\
         Key Assumptions:\n\
         {listed}\n\
         \n\
         Simulated Scenarios:\n\
         {outcomes}\n\
         \n\
         Based on this analysis, provide:\n\
         1. A primary, actionable recommendation.\n\
         2. A confidence score (0-100) for this recommendation.\n\
         3. A brief explanation for the confidence score, referencing key assumptions or scenarios.\n\
         4. A list of key factors that could change this recommendation.\n\
         5. A suggested timeline for when to re-evaluate this decision.",
        name = user.name(),
        role = user.role(),
        goal = user.goal(),
        horizon = user.time_horizon(),
        objective = structure.objective,
        listed = listed,
        outcomes = outcomes,
    );

    GenerationRequest::new(WizardStage::Recommendation, prompt, RECOMMENDATION_SCHEMA.clone())
}

fn structure_block(structure: &DecisionStructure) -> String {
    format!(
        "Decision Structure:\n\
         - Objective: {}\n\
         - Constraints: {}\n\
         - Variables: {}\n\
         - Success Criteria: {}",
        structure.objective,
        structure.constraints.join(", "),
        structure.variables.join(", "),
        structure.success_criteria.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::AssumptionReliability;
    use crate::domain::session::{Goal, OnboardingForm, Role, TimeHorizon};

    fn user() -> UserContext {
        OnboardingForm::new("Alex")
            .with_role(Role::Student)
            .with_goal(Goal::CareerClarity)
            .with_time_horizon(TimeHorizon::Long)
            .submit()
            .unwrap()
    }

    fn structure() -> DecisionStructure {
        DecisionStructure {
            objective: "Pick a grad program".to_string(),
            constraints: vec!["Budget".to_string(), "Location".to_string()],
            variables: vec!["School".to_string()],
            success_criteria: vec!["Job offer".to_string()],
        }
    }

    fn scenario(title: ScenarioTitle, outcome: &str) -> Scenario {
        Scenario {
            title,
            outcome: outcome.to_string(),
            time_impact: "1 year".to_string(),
            effort_cost: "high".to_string(),
            recovery_strategy: "N/A".to_string(),
        }
    }

    #[test]
    fn structure_prompt_carries_context_and_decision() {
        let req = structure_request("  Should I do a masters?  ", &user());

        assert_eq!(req.stage, WizardStage::Structuring);
        assert!(req.prompt.contains("- Role: student"));
        assert!(req.prompt.contains("- Primary Goal: career clarity"));
        assert!(req.prompt.contains("- Time Horizon: long-term (3+ years)"));
        assert!(req.prompt.contains("Decision: \"Should I do a masters?\""));
        assert_eq!(req.schema, *STRUCTURE_SCHEMA);
    }

    #[test]
    fn assumptions_prompt_joins_structure_lists() {
        let req = assumptions_request(&structure(), &user());
        assert!(req.prompt.contains("- Constraints: Budget, Location"));
        assert!(req.prompt.contains("- Success Criteria: Job offer"));
        assert_eq!(req.schema, *ASSUMPTIONS_SCHEMA);
    }

    #[test]
    fn scenarios_prompt_lists_every_assumption() {
        let assumptions = vec![
            Assumption::new("Funding holds", AssumptionReliability::Strong, false),
            Assumption::new("Admission likely", AssumptionReliability::Weak, true),
        ];
        let req = scenarios_request(&structure(), &assumptions, &user());

        assert!(req.prompt.contains("- Funding holds (Reliability: Strong, Risky: false)"));
        assert!(req.prompt.contains("- Admission likely (Reliability: Weak, Risky: true)"));
    }

    #[test]
    fn recommendation_prompt_filters_assumptions_and_marks_missing_scenarios() {
        let assumptions = vec![
            Assumption::new("Funding holds", AssumptionReliability::Strong, false),
            Assumption::new("Admission likely", AssumptionReliability::Weak, false),
        ];
        let scenarios = vec![scenario(ScenarioTitle::BestCase, "Dream school")];
        let req = recommendation_request(&structure(), &assumptions, &scenarios, &user());

        assert!(!req.prompt.contains("Funding holds"));
        assert!(req.prompt.contains("- Admission likely (Reliability: Weak)"));
        assert!(req.prompt.contains("- Best Case: Dream school"));
        assert!(req.prompt.contains("- Failure Case: not simulated"));
        assert!(req.prompt.contains("- Name: Alex"));
    }

    #[test]
    fn requests_are_never_blank() {
        assert!(!structure_request("x", &user()).is_blank());
        assert!(GenerationRequest::new(WizardStage::Structuring, "  ", STRUCTURE_SCHEMA.clone())
            .is_blank());
    }
}
