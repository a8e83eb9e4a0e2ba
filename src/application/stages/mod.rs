//! Stage components - one per wizard stage.
//!
//! Each stage owns exactly one generation call, its load status and its
//! local result. A stage never writes to the analysis record; it hands an
//! `AnalysisPatch` back on confirmation and the controller merges it.

mod assumptions;
mod recommendation;
mod scenarios;
mod structuring;

pub use assumptions::AssumptionsStage;
pub use recommendation::RecommendationStage;
pub use scenarios::ScenariosStage;
pub use structuring::StructuringStage;

use crate::domain::foundation::{StateMachine, ValidationError};
use crate::domain::wizard::StageStatus;

use super::GenerationFailure;

/// Why a stage run did not produce a result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StageError {
    /// Shown inline beside the input; nothing was sent.
    #[error(transparent)]
    Input(#[from] ValidationError),

    /// Shown in the console's error banner.
    #[error(transparent)]
    Generation(#[from] GenerationFailure),
}

/// Load status plus the local result of one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageState<T> {
    status: StageStatus,
    result: Option<T>,
}

impl<T> Default for StageState<T> {
    fn default() -> Self {
        Self {
            status: StageStatus::Idle,
            result: None,
        }
    }
}

impl<T> StageState<T> {
    pub fn status(&self) -> StageStatus {
        self.status
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// Enters `Loading`, dropping any previous result.
    pub(crate) fn begin(&mut self) -> Result<(), ValidationError> {
        self.status = self.status.transition_to(StageStatus::Loading)?;
        self.result = None;
        Ok(())
    }

    /// Leaves `Loading` with the outcome of the call.
    pub(crate) fn settle(&mut self, outcome: Result<T, GenerationFailure>) -> Result<(), StageError> {
        match outcome {
            Ok(value) => {
                self.status = self.status.transition_to(StageStatus::Ready)?;
                self.result = Some(value);
                Ok(())
            }
            Err(failure) => {
                self.status = self.status.transition_to(StageStatus::Failed)?;
                Err(failure.into())
            }
        }
    }

    /// The result, only while `Ready`.
    pub(crate) fn ready_result(&self) -> Option<&T> {
        match self.status {
            StageStatus::Ready => self.result.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::GenerationFailureKind;

    #[test]
    fn begin_then_settle_ready() {
        let mut state = StageState::<u8>::default();
        state.begin().unwrap();
        assert_eq!(state.status(), StageStatus::Loading);

        state.settle(Ok(7)).unwrap();
        assert_eq!(state.status(), StageStatus::Ready);
        assert_eq!(state.ready_result(), Some(&7));
    }

    #[test]
    fn failure_leaves_no_result() {
        let mut state = StageState::<u8>::default();
        state.begin().unwrap();
        let err = state
            .settle(Err(GenerationFailure::new(GenerationFailureKind::Parse, "x")))
            .unwrap_err();

        assert!(matches!(err, StageError::Generation(_)));
        assert_eq!(state.status(), StageStatus::Failed);
        assert_eq!(state.result(), None);
    }

    #[test]
    fn cannot_begin_twice() {
        let mut state = StageState::<u8>::default();
        state.begin().unwrap();
        assert!(state.begin().is_err());
    }

    #[test]
    fn settle_without_begin_is_rejected() {
        let mut state = StageState::<u8>::default();
        assert!(matches!(state.settle(Ok(1)), Err(StageError::Input(_))));
        assert_eq!(state.status(), StageStatus::Idle);
    }

    #[test]
    fn rerun_clears_previous_result() {
        let mut state = StageState::<u8>::default();
        state.begin().unwrap();
        state.settle(Ok(1)).unwrap();
        state.begin().unwrap();
        assert_eq!(state.result(), None);
    }
}
