//! Wizard stages and their fixed progression.
//!
//! 1. Structuring → 2. Assumptions → 3. Scenarios → 4. Recommendation
//!
//! There is no backward transition; `WizardController::reset` is the only
//! way back to the start.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::analysis::AnalysisRecord;
use crate::domain::foundation::StateMachine;

/// One of the four sequential phases of the wizard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum WizardStage {
    #[default]
    Structuring,
    Assumptions,
    Scenarios,
    Recommendation,
}

/// Fields of the analysis record a stage reads before it may render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prerequisite {
    Structure,
    Assumptions,
    Scenarios,
}

impl Prerequisite {
    /// True when the record already holds this field.
    pub fn is_met(&self, record: &AnalysisRecord) -> bool {
        match self {
            Prerequisite::Structure => record.structure.is_some(),
            Prerequisite::Assumptions => record.assumptions.is_some(),
            Prerequisite::Scenarios => record.scenarios.is_some(),
        }
    }
}

impl WizardStage {
    /// The canonical order of stages.
    pub const ORDER: [WizardStage; 4] = [
        WizardStage::Structuring,
        WizardStage::Assumptions,
        WizardStage::Scenarios,
        WizardStage::Recommendation,
    ];

    /// 0-based position in the sequence.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Stage at a 0-based position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ORDER.get(index).copied()
    }

    /// The next stage, or None at the end.
    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn first() -> Self {
        Self::ORDER[0]
    }

    /// Title shown in the stepper.
    pub fn title(&self) -> &'static str {
        match self {
            WizardStage::Structuring => "Structuring",
            WizardStage::Assumptions => "Assumptions",
            WizardStage::Scenarios => "Scenarios",
            WizardStage::Recommendation => "Recommendation",
        }
    }

    /// Record fields that must be present before this stage renders.
    pub fn prerequisites(&self) -> &'static [Prerequisite] {
        match self {
            WizardStage::Structuring => &[],
            WizardStage::Assumptions => &[Prerequisite::Structure],
            WizardStage::Scenarios => &[Prerequisite::Structure, Prerequisite::Assumptions],
            WizardStage::Recommendation => &[
                Prerequisite::Structure,
                Prerequisite::Assumptions,
                Prerequisite::Scenarios,
            ],
        }
    }

    /// True when every prerequisite is present in the record.
    pub fn prerequisites_met(&self, record: &AnalysisRecord) -> bool {
        self.prerequisites().iter().all(|p| p.is_met(record))
    }

    /// The stage loads as soon as it mounts instead of waiting for input.
    pub fn loads_on_mount(&self) -> bool {
        !matches!(self, WizardStage::Structuring)
    }

    /// The stage hands its result over without a confirm gesture.
    pub fn auto_advances(&self) -> bool {
        matches!(self, WizardStage::Recommendation)
    }
}

impl fmt::Display for WizardStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl StateMachine for WizardStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.next() == Some(*target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        self.next().into_iter().collect()
    }
}
