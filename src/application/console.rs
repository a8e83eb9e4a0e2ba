//! DecisionConsole - drives one user through the four stages.
//!
//! Owns the wizard controller, the mounted stage component, the loading
//! flag and the error banner. Generation failures end up in the banner;
//! they never leave this type as an `Err` or a panic.

use crate::domain::analysis::AnalysisRecord;
use crate::domain::foundation::ValidationError;
use crate::domain::session::UserContext;
use crate::domain::wizard::{StageStatus, WizardController, WizardStage};

use super::stages::{
    AssumptionsStage, RecommendationStage, ScenariosStage, StageError, StructuringStage,
};
use super::GenerationClient;

/// The stage component currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveStage {
    Structuring(StructuringStage),
    Assumptions(AssumptionsStage),
    Scenarios(ScenariosStage),
    Recommendation(RecommendationStage),
    /// The controller points at a stage whose inputs are missing.
    Unavailable(WizardStage),
}

impl ActiveStage {
    fn mount(controller: &WizardController) -> Self {
        let stage = controller.stage();
        if controller.renderable_stage().is_none() {
            tracing::warn!(%stage, "Stage prerequisites missing; nothing to render");
            return ActiveStage::Unavailable(stage);
        }

        match stage {
            WizardStage::Structuring => {
                ActiveStage::Structuring(StructuringStage::new(controller.record().decision.clone()))
            }
            WizardStage::Assumptions => ActiveStage::Assumptions(AssumptionsStage::new()),
            WizardStage::Scenarios => ActiveStage::Scenarios(ScenariosStage::new()),
            WizardStage::Recommendation => ActiveStage::Recommendation(RecommendationStage::new()),
        }
    }

    pub fn stage(&self) -> WizardStage {
        match self {
            ActiveStage::Structuring(_) => WizardStage::Structuring,
            ActiveStage::Assumptions(_) => WizardStage::Assumptions,
            ActiveStage::Scenarios(_) => WizardStage::Scenarios,
            ActiveStage::Recommendation(_) => WizardStage::Recommendation,
            ActiveStage::Unavailable(stage) => *stage,
        }
    }

    pub fn status(&self) -> StageStatus {
        match self {
            ActiveStage::Structuring(s) => s.status(),
            ActiveStage::Assumptions(s) => s.status(),
            ActiveStage::Scenarios(s) => s.status(),
            ActiveStage::Recommendation(s) => s.status(),
            ActiveStage::Unavailable(_) => StageStatus::Idle,
        }
    }
}

/// What a call to [`DecisionConsole::run_active`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The stage has a result waiting for confirmation.
    Ready,
    /// The final stage's result was merged into the record.
    Completed,
    /// Input was rejected inline; nothing was sent.
    InputRejected(ValidationError),
    /// The call failed; the banner holds the message.
    Failed,
    /// Nothing to run in the current state.
    Skipped,
}

/// One wizard run for one user.
pub struct DecisionConsole {
    client: GenerationClient,
    user: UserContext,
    controller: WizardController,
    active: ActiveStage,
    is_loading: bool,
    error: Option<String>,
}

impl DecisionConsole {
    pub fn new(client: GenerationClient, user: UserContext) -> Self {
        let controller = WizardController::new();
        let active = ActiveStage::mount(&controller);
        Self {
            client,
            user,
            controller,
            active,
            is_loading: false,
            error: None,
        }
    }

    pub fn user(&self) -> &UserContext {
        &self.user
    }

    pub fn stage(&self) -> WizardStage {
        self.controller.stage()
    }

    pub fn record(&self) -> &AnalysisRecord {
        self.controller.record()
    }

    pub fn active(&self) -> &ActiveStage {
        &self.active
    }

    /// True only while a `run_active` future is pending.
    ///
    /// `run_active` holds `&mut self` for the whole call, so once it returns
    /// this is false again. The shell shows progress with a spinner around
    /// the await instead of reading this flag.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_banner(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_complete(&self) -> bool {
        self.controller.is_complete()
    }

    /// Edits the decision text on the structuring stage.
    pub fn set_decision(&mut self, text: impl Into<String>) {
        if let ActiveStage::Structuring(stage) = &mut self.active {
            stage.set_decision(text);
        }
    }

    /// True when the mounted stage should load without waiting for input.
    pub fn should_autoload(&self) -> bool {
        self.stage().loads_on_mount() && self.active.status() == StageStatus::Idle
    }

    /// Runs the mounted stage's generation call.
    ///
    /// Stages 2-4 run once per mount; only the structuring stage can be run
    /// again after it settles.
    pub async fn run_active(&mut self) -> RunOutcome {
        let (rerunnable, blank_input) = match &self.active {
            ActiveStage::Unavailable(_) => return RunOutcome::Skipped,
            ActiveStage::Structuring(stage) => (true, stage.decision().trim().is_empty()),
            _ => (false, false),
        };
        if !rerunnable && self.active.status() != StageStatus::Idle {
            return RunOutcome::Skipped;
        }
        if blank_input {
            return self.run_structuring().await;
        }

        self.error = None;
        self.is_loading = true;
        let outcome = match self.active.stage() {
            WizardStage::Structuring => self.run_structuring().await,
            WizardStage::Assumptions => self.run_assumptions().await,
            WizardStage::Scenarios => self.run_scenarios().await,
            WizardStage::Recommendation => self.run_recommendation().await,
        };
        self.is_loading = false;
        outcome
    }

    /// Hands the ready result to the controller and mounts the next stage.
    ///
    /// Returns false when there is nothing to confirm.
    pub fn confirm(&mut self) -> bool {
        let patch = match &self.active {
            ActiveStage::Structuring(s) => s.confirm(),
            ActiveStage::Assumptions(s) => s.confirm(),
            ActiveStage::Scenarios(s) => s.confirm(),
            ActiveStage::Recommendation(_) | ActiveStage::Unavailable(_) => None,
        };

        let Some(patch) = patch else {
            return false;
        };

        self.controller.advance(patch);
        self.active = ActiveStage::mount(&self.controller);
        true
    }

    /// Starts over: first stage, empty record, no banner.
    pub fn new_decision(&mut self) {
        self.controller.reset();
        self.error = None;
        self.is_loading = false;
        self.active = ActiveStage::mount(&self.controller);
    }

    async fn run_structuring(&mut self) -> RunOutcome {
        let ActiveStage::Structuring(stage) = &mut self.active else {
            return RunOutcome::Skipped;
        };
        let result = stage.submit(&self.client, &self.user).await;
        self.settle(result.map(|_| RunOutcome::Ready))
    }

    async fn run_assumptions(&mut self) -> RunOutcome {
        let (ActiveStage::Assumptions(stage), Some(structure)) =
            (&mut self.active, self.controller.record().structure.as_ref())
        else {
            return RunOutcome::Skipped;
        };
        let result = stage.load(&self.client, structure, &self.user).await;
        self.settle(result.map(|_| RunOutcome::Ready))
    }

    async fn run_scenarios(&mut self) -> RunOutcome {
        let record = self.controller.record();
        let (ActiveStage::Scenarios(stage), Some(structure), Some(assumptions)) = (
            &mut self.active,
            record.structure.as_ref(),
            record.assumptions.as_deref(),
        ) else {
            return RunOutcome::Skipped;
        };
        let result = stage
            .load(&self.client, structure, assumptions, &self.user)
            .await;
        self.settle(result.map(|_| RunOutcome::Ready))
    }

    async fn run_recommendation(&mut self) -> RunOutcome {
        let record = self.controller.record();
        let (
            ActiveStage::Recommendation(stage),
            Some(structure),
            Some(assumptions),
            Some(scenarios),
        ) = (
            &mut self.active,
            record.structure.as_ref(),
            record.assumptions.as_deref(),
            record.scenarios.as_deref(),
        )
        else {
            return RunOutcome::Skipped;
        };

        let result = stage
            .load(&self.client, structure, assumptions, scenarios, &self.user)
            .await;

        match result {
            Ok(patch) => {
                self.controller.advance(patch);
                RunOutcome::Completed
            }
            Err(e) => self.settle(Err(e)),
        }
    }

    fn settle(&mut self, result: Result<RunOutcome, StageError>) -> RunOutcome {
        match result {
            Ok(outcome) => outcome,
            Err(StageError::Input(e)) => RunOutcome::InputRejected(e),
            Err(StageError::Generation(failure)) => {
                self.error = Some(failure.to_string());
                RunOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockError, MockGenerationProvider};
    use crate::adapters::validation::ResponseSchemaValidator;
    use crate::application::GENERATION_FAILURE_MESSAGE;
    use crate::domain::session::OnboardingForm;
    use serde_json::json;
    use std::sync::Arc;

    fn console(provider: &MockGenerationProvider) -> DecisionConsole {
        let client = GenerationClient::new(
            Arc::new(provider.clone()),
            Arc::new(ResponseSchemaValidator::new()),
        );
        DecisionConsole::new(client, OnboardingForm::new("Alex").submit().unwrap())
    }

    fn structure_json() -> serde_json::Value {
        json!({
            "objective": "Grow",
            "constraints": ["Stay local"],
            "variables": ["Salary"],
            "successCriteria": ["Promotion"]
        })
    }

    #[test]
    fn starts_on_structuring_without_banner() {
        let console = console(&MockGenerationProvider::new());
        assert_eq!(console.stage(), WizardStage::Structuring);
        assert!(matches!(console.active(), ActiveStage::Structuring(_)));
        assert!(console.error_banner().is_none());
        assert!(!console.should_autoload());
    }

    #[tokio::test]
    async fn empty_decision_is_inline_and_keeps_banner_clear() {
        let provider = MockGenerationProvider::new();
        let mut console = console(&provider);

        let outcome = console.run_active().await;

        assert!(matches!(outcome, RunOutcome::InputRejected(_)));
        assert!(console.error_banner().is_none());
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn failure_sets_banner_and_next_call_clears_it() {
        let provider = MockGenerationProvider::new()
            .with_error(MockError::Network {
                message: "reset".to_string(),
            })
            .with_json(structure_json());
        let mut console = console(&provider);
        console.set_decision("Take Job X?");

        assert_eq!(console.run_active().await, RunOutcome::Failed);
        assert_eq!(console.error_banner(), Some(GENERATION_FAILURE_MESSAGE));
        assert!(!console.is_loading());

        assert_eq!(console.run_active().await, RunOutcome::Ready);
        assert!(console.error_banner().is_none());
    }

    #[tokio::test]
    async fn confirm_advances_and_mounts_autoloading_stage() {
        let provider = MockGenerationProvider::new().with_json(structure_json());
        let mut console = console(&provider);
        console.set_decision("Take Job X?");

        assert!(!console.confirm());
        console.run_active().await;
        assert!(console.confirm());

        assert_eq!(console.stage(), WizardStage::Assumptions);
        assert!(matches!(console.active(), ActiveStage::Assumptions(_)));
        assert!(console.should_autoload());
        assert_eq!(console.record().decision, "Take Job X?");
    }

    #[tokio::test]
    async fn later_stages_do_not_rerun_after_failure() {
        let provider = MockGenerationProvider::new()
            .with_json(structure_json())
            .with_response("garbage");
        let mut console = console(&provider);
        console.set_decision("Take Job X?");
        console.run_active().await;
        console.confirm();

        assert_eq!(console.run_active().await, RunOutcome::Failed);
        assert_eq!(console.run_active().await, RunOutcome::Skipped);
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn new_decision_resets_everything() {
        let provider = MockGenerationProvider::new()
            .with_json(structure_json())
            .with_error(MockError::AuthenticationFailed);
        let mut console = console(&provider);
        console.set_decision("Take Job X?");
        console.run_active().await;
        console.confirm();
        console.run_active().await;
        assert!(console.error_banner().is_some());

        console.new_decision();

        assert_eq!(console.stage(), WizardStage::Structuring);
        assert!(console.record().is_empty());
        assert!(console.error_banner().is_none());
        match console.active() {
            ActiveStage::Structuring(stage) => assert_eq!(stage.decision(), ""),
            other => panic!("unexpected stage: {:?}", other),
        }
    }
}
