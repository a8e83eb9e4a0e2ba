//! Stage 3 - simulate best, base and failure cases.

use crate::application::GenerationClient;
use crate::domain::analysis::{
    canonicalize, AnalysisPatch, Assumption, DecisionStructure, Scenario, ScenarioDraft,
};
use crate::domain::prompts::scenarios_request;
use crate::domain::session::UserContext;
use crate::domain::wizard::StageStatus;

use super::{StageError, StageState};

/// Loads on mount and shows scenarios in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenariosStage {
    state: StageState<Vec<Scenario>>,
}

impl ScenariosStage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> StageStatus {
        self.state.status()
    }

    pub fn result(&self) -> Option<&[Scenario]> {
        self.state.result().map(Vec::as_slice)
    }

    pub async fn load(
        &mut self,
        client: &GenerationClient,
        structure: &DecisionStructure,
        assumptions: &[Assumption],
        user: &UserContext,
    ) -> Result<(), StageError> {
        self.state.begin()?;
        let request = scenarios_request(structure, assumptions, user);
        let outcome = client
            .generate::<Vec<ScenarioDraft>>(&request)
            .await
            .map(canonicalize);
        self.state.settle(outcome)
    }

    /// No minimum count: whatever survived canonicalization is handed over.
    pub fn confirm(&self) -> Option<AnalysisPatch> {
        self.state
            .ready_result()
            .map(|scenarios| AnalysisPatch::Scenarios(scenarios.clone()))
    }
}
