//! Wizard controller - stage index plus the accumulated analysis record.

use crate::domain::analysis::{AnalysisPatch, AnalysisRecord};
use crate::domain::foundation::StateMachine;

use super::WizardStage;

/// Owns the active stage and the analysis record.
///
/// The record is only ever mutated here, and only after a stage's
/// generation call has fully resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardController {
    stage: WizardStage,
    record: AnalysisRecord,
}

impl WizardController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> WizardStage {
        self.stage
    }

    pub fn record(&self) -> &AnalysisRecord {
        &self.record
    }

    /// Merges a stage result and moves one stage forward.
    ///
    /// On the last stage the data is merged and the stage stays put.
    /// Returns the stage active after the call.
    pub fn advance(&mut self, patch: AnalysisPatch) -> WizardStage {
        let kind = patch.kind();
        self.record.apply(patch);

        match self.stage.next() {
            Some(next) => match self.stage.transition_to(next) {
                Ok(stage) => {
                    tracing::info!(from = %self.stage, to = %stage, patch = kind, "Advancing wizard");
                    self.stage = stage;
                }
                Err(e) => tracing::warn!("Stage transition rejected: {}", e),
            },
            None => {
                tracing::info!(stage = %self.stage, patch = kind, "Merged result on final stage");
            }
        }

        self.stage
    }

    /// Back to the first stage with an empty record.
    pub fn reset(&mut self) {
        tracing::info!(from = %self.stage, "Resetting wizard");
        self.stage = WizardStage::first();
        self.record = AnalysisRecord::default();
    }

    /// Whether `stage` may render given what the record holds.
    pub fn can_render(&self, stage: WizardStage) -> bool {
        stage.prerequisites_met(&self.record)
    }

    /// The active stage, if its prerequisites are present.
    pub fn renderable_stage(&self) -> Option<WizardStage> {
        self.can_render(self.stage).then_some(self.stage)
    }

    /// True once the recommendation has been merged.
    pub fn is_complete(&self) -> bool {
        self.record.recommendation.is_some()
    }
}
