//! Onboarding form - the only way a `UserContext` comes into existence.

use crate::domain::foundation::{SessionId, ValidationError};

use super::{Goal, Role, TimeHorizon, UserContext};

/// Values collected by the onboarding step, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingForm {
    pub name: String,
    pub role: Role,
    pub goal: Goal,
    pub time_horizon: TimeHorizon,
}

impl OnboardingForm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goal = goal;
        self
    }

    pub fn with_time_horizon(mut self, time_horizon: TimeHorizon) -> Self {
        self.time_horizon = time_horizon;
        self
    }

    /// Checks the form without consuming it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field(
                "name",
                "Please enter your first name.",
            ));
        }
        Ok(())
    }

    /// Validates the form and mints a fresh session.
    pub fn submit(self) -> Result<UserContext, ValidationError> {
        self.validate()?;
        Ok(UserContext::new(
            SessionId::new(),
            self.name,
            self.role,
            self.goal,
            self.time_horizon,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected_inline() {
        let err = OnboardingForm::new("   ").submit().unwrap_err();
        assert_eq!(err.field(), "name");
        assert_eq!(err.to_string(), "Please enter your first name.");
    }

    #[test]
    fn submit_creates_context_with_fresh_session() {
        let ctx = OnboardingForm::new("Alex")
            .with_role(Role::Student)
            .with_goal(Goal::LearningFocus)
            .with_time_horizon(TimeHorizon::Short)
            .submit()
            .unwrap();

        assert_eq!(ctx.name(), "Alex");
        assert_eq!(ctx.role(), Role::Student);
        assert_eq!(ctx.goal(), Goal::LearningFocus);
        assert_eq!(ctx.time_horizon(), TimeHorizon::Short);
        assert!(ctx.session_id().as_str().starts_with("temp_"));
    }

    #[test]
    fn form_defaults_to_professional_decision_confidence_medium() {
        let form = OnboardingForm::new("Sam");
        assert_eq!(form.role, Role::Professional);
        assert_eq!(form.goal, Goal::DecisionConfidence);
        assert_eq!(form.time_horizon, TimeHorizon::Medium);
    }
}
