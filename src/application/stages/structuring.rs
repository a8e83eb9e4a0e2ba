//! Stage 1 - turn the user's decision text into a decision structure.

use crate::application::GenerationClient;
use crate::domain::analysis::{AnalysisPatch, DecisionStructure};
use crate::domain::foundation::ValidationError;
use crate::domain::prompts::structure_request;
use crate::domain::session::UserContext;
use crate::domain::wizard::StageStatus;

use super::{StageError, StageState};

const EMPTY_DECISION_MESSAGE: &str = "Please describe the decision you're facing.";

/// The only stage that waits for input and the only one that can re-run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuringStage {
    decision: String,
    input_error: Option<ValidationError>,
    state: StageState<DecisionStructure>,
}

impl StructuringStage {
    /// Mounts the stage with the previously entered decision text.
    pub fn new(initial_decision: impl Into<String>) -> Self {
        Self {
            decision: initial_decision.into(),
            ..Default::default()
        }
    }

    pub fn decision(&self) -> &str {
        &self.decision
    }

    /// Replaces the decision text. Editing clears a stale inline error.
    pub fn set_decision(&mut self, text: impl Into<String>) {
        self.decision = text.into();
        self.input_error = None;
    }

    pub fn input_error(&self) -> Option<&ValidationError> {
        self.input_error.as_ref()
    }

    pub fn status(&self) -> StageStatus {
        self.state.status()
    }

    pub fn result(&self) -> Option<&DecisionStructure> {
        self.state.result()
    }

    /// Generates the structure for the current decision text.
    ///
    /// Blank text is rejected inline without touching the network.
    pub async fn submit(
        &mut self,
        client: &GenerationClient,
        user: &UserContext,
    ) -> Result<(), StageError> {
        if self.decision.trim().is_empty() {
            let err = ValidationError::empty_field("decision", EMPTY_DECISION_MESSAGE);
            self.input_error = Some(err.clone());
            return Err(err.into());
        }
        self.input_error = None;

        self.state.begin()?;
        let request = structure_request(&self.decision, user);
        let outcome = client.generate::<DecisionStructure>(&request).await;
        self.state.settle(outcome)
    }

    /// Hands the decision and its structure to the controller.
    pub fn confirm(&self) -> Option<AnalysisPatch> {
        self.state.ready_result().map(|structure| AnalysisPatch::Structure {
            decision: self.decision.trim().to_string(),
            structure: structure.clone(),
        })
    }
}
