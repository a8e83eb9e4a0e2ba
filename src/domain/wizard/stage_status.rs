//! Load status of a single stage.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Lifecycle of one stage's generation call.
///
/// ```text
/// Idle ──► Loading ──► Ready
///             │  ▲        │
///             ▼  └────────┘ (re-trigger)
///           Failed ───► Loading
/// ```
///
/// Re-triggering from `Ready` or `Failed` is only offered by the
/// structuring stage; the others escape a failure through a full reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

impl StateMachine for StageStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use StageStatus::*;
        matches!(
            (self, target),
            (Idle, Loading)
                | (Loading, Ready)
                | (Loading, Failed)
                | (Ready, Loading)
                | (Failed, Loading)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use StageStatus::*;
        match self {
            Idle => vec![Loading],
            Loading => vec![Ready, Failed],
            Ready => vec![Loading],
            Failed => vec![Loading],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_only_moves_to_loading() {
        assert_eq!(StageStatus::Idle.valid_transitions(), vec![StageStatus::Loading]);
        assert!(StageStatus::Idle.transition_to(StageStatus::Ready).is_err());
    }

    #[test]
    fn loading_settles_to_ready_or_failed() {
        assert!(StageStatus::Loading.can_transition_to(&StageStatus::Ready));
        assert!(StageStatus::Loading.can_transition_to(&StageStatus::Failed));
        assert!(!StageStatus::Loading.can_transition_to(&StageStatus::Idle));
    }

    #[test]
    fn no_status_is_terminal() {
        for status in [
            StageStatus::Idle,
            StageStatus::Loading,
            StageStatus::Ready,
            StageStatus::Failed,
        ] {
            assert!(!status.is_terminal());
        }
    }
}
