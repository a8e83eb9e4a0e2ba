//! User context collected at onboarding.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::SessionId;

/// What the user does day to day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    #[default]
    Professional,
    Other,
}

impl Role {
    /// All roles in display order.
    pub fn all() -> &'static [Role; 3] {
        &[Role::Student, Role::Professional, Role::Other]
    }

    /// Label used in prompts and menus.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Professional => "professional",
            Role::Other => "other",
        }
    }
}

/// What the user wants out of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    CareerClarity,
    LearningFocus,
    #[default]
    DecisionConfidence,
}

impl Goal {
    /// All goals in display order.
    pub fn all() -> &'static [Goal; 3] {
        &[Goal::CareerClarity, Goal::LearningFocus, Goal::DecisionConfidence]
    }

    /// Label used in prompts and menus.
    pub fn label(&self) -> &'static str {
        match self {
            Goal::CareerClarity => "career clarity",
            Goal::LearningFocus => "learning focus",
            Goal::DecisionConfidence => "decision confidence",
        }
    }
}

/// How far ahead the decision reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeHorizon {
    Short,
    #[default]
    Medium,
    Long,
}

impl TimeHorizon {
    /// All horizons in display order.
    pub fn all() -> &'static [TimeHorizon; 3] {
        &[TimeHorizon::Short, TimeHorizon::Medium, TimeHorizon::Long]
    }

    /// Label used in prompts and menus.
    pub fn label(&self) -> &'static str {
        match self {
            TimeHorizon::Short => "short-term (<1 year)",
            TimeHorizon::Medium => "medium-term (1-3 years)",
            TimeHorizon::Long => "long-term (3+ years)",
        }
    }
}

macro_rules! display_via_label {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

display_via_label!(Role, Goal, TimeHorizon);

/// Identity and preferences for one session.
///
/// Created once at onboarding and never mutated afterwards; ending the
/// session discards it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserContext {
    session_id: SessionId,
    name: String,
    role: Role,
    goal: Goal,
    time_horizon: TimeHorizon,
}

impl UserContext {
    /// Creates a user context. Callers go through `OnboardingForm::submit`,
    /// which validates the name first.
    pub(crate) fn new(
        session_id: SessionId,
        name: String,
        role: Role,
        goal: Goal,
        time_horizon: TimeHorizon,
    ) -> Self {
        Self {
            session_id,
            name,
            role,
            goal,
            time_horizon,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn goal(&self) -> Goal {
        self.goal
    }

    pub fn time_horizon(&self) -> TimeHorizon {
        self.time_horizon
    }
}
