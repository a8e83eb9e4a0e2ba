//! Analysis record - everything the wizard has collected so far.

use serde::{Deserialize, Serialize};

use super::{Assumption, DecisionStructure, Recommendation, Scenario};

/// Accumulated results of one pass through the wizard.
///
/// Fields fill in stage order. A field stays `None` until its stage hands
/// over a result; a failed stage leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub decision: String,
    pub structure: Option<DecisionStructure>,
    pub assumptions: Option<Vec<Assumption>>,
    pub scenarios: Option<Vec<Scenario>>,
    pub recommendation: Option<Recommendation>,
}

/// Partial data a stage hands back when it completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisPatch {
    Structure {
        decision: String,
        structure: DecisionStructure,
    },
    Assumptions(Vec<Assumption>),
    Scenarios(Vec<Scenario>),
    Recommendation(Recommendation),
}

impl AnalysisPatch {
    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisPatch::Structure { .. } => "structure",
            AnalysisPatch::Assumptions(_) => "assumptions",
            AnalysisPatch::Scenarios(_) => "scenarios",
            AnalysisPatch::Recommendation(_) => "recommendation",
        }
    }
}

impl AnalysisRecord {
    /// Merges a stage result into the record.
    pub fn apply(&mut self, patch: AnalysisPatch) {
        match patch {
            AnalysisPatch::Structure {
                decision,
                structure,
            } => {
                self.decision = decision;
                self.structure = Some(structure);
            }
            AnalysisPatch::Assumptions(assumptions) => self.assumptions = Some(assumptions),
            AnalysisPatch::Scenarios(scenarios) => self.scenarios = Some(scenarios),
            AnalysisPatch::Recommendation(rec) => self.recommendation = Some(rec),
        }
    }

    /// True when nothing has been collected.
    pub fn is_empty(&self) -> bool {
        self.decision.is_empty()
            && self.structure.is_none()
            && self.assumptions.is_none()
            && self.scenarios.is_none()
            && self.recommendation.is_none()
    }
}
