//! Stage 2 - surface the assumptions behind the structure.

use crate::application::GenerationClient;
use crate::domain::analysis::{AnalysisPatch, Assumption, DecisionStructure};
use crate::domain::prompts::assumptions_request;
use crate::domain::session::UserContext;
use crate::domain::wizard::StageStatus;

use super::{StageError, StageState};

/// Loads on mount; an empty list is a valid, confirmable result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssumptionsStage {
    state: StageState<Vec<Assumption>>,
}

impl AssumptionsStage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> StageStatus {
        self.state.status()
    }

    pub fn result(&self) -> Option<&[Assumption]> {
        self.state.result().map(Vec::as_slice)
    }

    /// True when the model found nothing worth flagging.
    pub fn is_empty_result(&self) -> bool {
        self.result().is_some_and(|a| a.is_empty())
    }

    pub async fn load(
        &mut self,
        client: &GenerationClient,
        structure: &DecisionStructure,
        user: &UserContext,
    ) -> Result<(), StageError> {
        self.state.begin()?;
        let request = assumptions_request(structure, user);
        let outcome = client.generate::<Vec<Assumption>>(&request).await;
        self.state.settle(outcome)
    }

    pub fn confirm(&self) -> Option<AnalysisPatch> {
        self.state
            .ready_result()
            .map(|assumptions| AnalysisPatch::Assumptions(assumptions.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockGenerationProvider;
    use crate::adapters::validation::ResponseSchemaValidator;
    use crate::domain::session::OnboardingForm;
    use serde_json::json;
    use std::sync::Arc;

    fn client(provider: &MockGenerationProvider) -> GenerationClient {
        GenerationClient::new(
            Arc::new(provider.clone()),
            Arc::new(ResponseSchemaValidator::new()),
        )
    }

    fn structure() -> DecisionStructure {
        DecisionStructure {
            objective: "Grow".to_string(),
            constraints: vec![],
            variables: vec![],
            success_criteria: vec![],
        }
    }

    #[tokio::test]
    async fn empty_list_is_ready_and_confirmable() {
        let provider = MockGenerationProvider::new().with_json(json!([]));
        let user = OnboardingForm::new("Alex").submit().unwrap();
        let mut stage = AssumptionsStage::new();

        stage.load(&client(&provider), &structure(), &user).await.unwrap();

        assert!(stage.is_empty_result());
        assert_eq!(stage.confirm(), Some(AnalysisPatch::Assumptions(vec![])));
    }

    #[tokio::test]
    async fn keeps_response_order() {
        let provider = MockGenerationProvider::new().with_json(json!([
            {"assumption": "b", "reliability": "Weak", "isRisky": true},
            {"assumption": "a", "reliability": "Strong", "isRisky": false}
        ]));
        let user = OnboardingForm::new("Alex").submit().unwrap();
        let mut stage = AssumptionsStage::new();

        stage.load(&client(&provider), &structure(), &user).await.unwrap();

        let texts: Vec<&str> = stage.result().unwrap().iter().map(|a| a.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn failure_has_no_patch() {
        let provider = MockGenerationProvider::new().with_response("not json");
        let user = OnboardingForm::new("Alex").submit().unwrap();
        let mut stage = AssumptionsStage::new();

        assert!(stage.load(&client(&provider), &structure(), &user).await.is_err());
        assert_eq!(stage.status(), StageStatus::Failed);
        assert_eq!(stage.confirm(), None);
    }
}
