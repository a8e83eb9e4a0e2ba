//! Stage 4 - the final recommendation.

use crate::application::GenerationClient;
use crate::domain::analysis::{
    AnalysisPatch, Assumption, DecisionStructure, Recommendation, Scenario,
};
use crate::domain::prompts::recommendation_request;
use crate::domain::session::UserContext;
use crate::domain::wizard::StageStatus;

use super::{StageError, StageState};

/// Loads on mount and hands its result over as soon as it arrives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationStage {
    state: StageState<Recommendation>,
}

impl RecommendationStage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> StageStatus {
        self.state.status()
    }

    pub fn result(&self) -> Option<&Recommendation> {
        self.state.result()
    }

    /// Generates the recommendation and returns the patch to merge.
    pub async fn load(
        &mut self,
        client: &GenerationClient,
        structure: &DecisionStructure,
        assumptions: &[Assumption],
        scenarios: &[Scenario],
        user: &UserContext,
    ) -> Result<AnalysisPatch, StageError> {
        self.state.begin()?;
        let request = recommendation_request(structure, assumptions, scenarios, user);
        let outcome = client.generate::<Recommendation>(&request).await;
        self.state.settle(outcome.clone())?;
        Ok(AnalysisPatch::Recommendation(outcome?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockGenerationProvider;
    use crate::adapters::validation::ResponseSchemaValidator;
    use crate::domain::analysis::ConfidenceBand;
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
    async fn success_returns_patch_immediately() {
        let provider = MockGenerationProvider::new().with_json(json!({
            "primaryRecommendation": "Take it",
            "confidenceScore": 72,
            "confidenceReasoning": "Solid",
            "changeFactors": ["Offer withdrawn"],
            "reevaluationTimeline": "6 months"
        }));
        let user = OnboardingForm::new("Alex").submit().unwrap();
        let mut stage = RecommendationStage::new();

        let patch = stage
            .load(&client(&provider), &structure(), &[], &[], &user)
            .await
            .unwrap();

        assert_eq!(stage.status(), StageStatus::Ready);
        match patch {
            AnalysisPatch::Recommendation(rec) => {
                assert_eq!(rec.confidence_score.value(), 72);
                assert_eq!(rec.confidence_score.band(), ConfidenceBand::High);
            }
            other => panic!("unexpected patch: {:?}", other),
        }
    }

    #[tokio::test]
    async fn failure_reports_generation_error() {
        let provider = MockGenerationProvider::new().with_json(json!({"primaryRecommendation": "x"}));
        let user = OnboardingForm::new("Alex").submit().unwrap();
        let mut stage = RecommendationStage::new();

        let err = stage
            .load(&client(&provider), &structure(), &[], &[], &user)
            .await
            .unwrap_err();

        assert!(matches!(err, StageError::Generation(_)));
        assert_eq!(stage.status(), StageStatus::Failed);
    }
}
