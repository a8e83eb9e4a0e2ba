//! Session module - who the user is for the lifetime of one console run.

mod onboarding;
mod user_context;

pub use onboarding::OnboardingForm;
pub use user_context::{Goal, Role, TimeHorizon, UserContext};
