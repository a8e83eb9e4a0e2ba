//! Decision structure - output of the structuring stage.

use serde::{Deserialize, Serialize};

/// Objective, constraints, variables and success criteria of a decision.
///
/// Immutable once produced; every later stage reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionStructure {
    /// A single sentence defining the primary goal of the decision.
    pub objective: String,
    /// Limitations or boundaries: what must be avoided or preserved.
    pub constraints: Vec<String>,
    /// Factors that can be changed or chosen.
    pub variables: Vec<String>,
    /// Measurable outcomes for success.
    pub success_criteria: Vec<String>,
}

impl DecisionStructure {
    /// True when the objective is set and every list has at least one entry.
    pub fn is_complete(&self) -> bool {
        !self.objective.trim().is_empty()
            && !self.constraints.is_empty()
            && !self.variables.is_empty()
            && !self.success_criteria.is_empty()
    }
}
