//! Recommendation - the terminal artifact of the wizard.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Confidence in a recommendation, 0 to 100 inclusive.
///
/// Out-of-range values are rejected rather than clamped, so a model that
/// answers `140` fails validation instead of silently reading as `100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ConfidenceScore(u8);

impl ConfidenceScore {
    pub const MIN: i64 = 0;
    pub const MAX: i64 = 100;

    /// Creates a score, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "confidenceScore",
                Self::MIN,
                Self::MAX,
                value,
            ));
        }
        Ok(Self(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    pub fn band(&self) -> ConfidenceBand {
        match self.0 {
            0..=39 => ConfidenceBand::Low,
            40..=69 => ConfidenceBand::Moderate,
            _ => ConfidenceBand::High,
        }
    }
}

impl TryFrom<i64> for ConfidenceScore {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<ConfidenceScore> for i64 {
    fn from(score: ConfidenceScore) -> Self {
        i64::from(score.0)
    }
}

impl fmt::Display for ConfidenceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Coarse reading of a confidence score, used for colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    Low,
    Moderate,
    High,
}

/// Final synthesized recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub primary_recommendation: String,
    pub confidence_score: ConfidenceScore,
    pub confidence_reasoning: String,
    /// What could change the decision.
    pub change_factors: Vec<String>,
    /// When to reconsider.
    pub reevaluation_timeline: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn score_accepts_bounds() {
        assert_eq!(ConfidenceScore::try_new(0).unwrap().value(), 0);
        assert_eq!(ConfidenceScore::try_new(100).unwrap().value(), 100);
    }

    #[test]
    fn score_rejects_out_of_range() {
        assert!(ConfidenceScore::try_new(-1).is_err());
        assert!(ConfidenceScore::try_new(101).is_err());
    }

    #[test]
    fn score_bands() {
        assert_eq!(ConfidenceScore::try_new(39).unwrap().band(), ConfidenceBand::Low);
        assert_eq!(ConfidenceScore::try_new(40).unwrap().band(), ConfidenceBand::Moderate);
        assert_eq!(ConfidenceScore::try_new(69).unwrap().band(), ConfidenceBand::Moderate);
        assert_eq!(ConfidenceScore::try_new(70).unwrap().band(), ConfidenceBand::High);
    }

    #[test]
    fn score_displays_as_percent() {
        assert_eq!(ConfidenceScore::try_new(72).unwrap().to_string(), "72%");
    }

    #[test]
    fn recommendation_deserializes_wire_shape() {
        let rec: Recommendation = serde_json::from_value(json!({
            "primaryRecommendation": "Take the offer",
            "confidenceScore": 72,
            "confidenceReasoning": "Most assumptions hold",
            "changeFactors": ["Counter-offer"],
            "reevaluationTimeline": "In six months"
        }))
        .unwrap();

        assert_eq!(rec.confidence_score.value(), 72);
        assert_eq!(rec.change_factors, vec!["Counter-offer"]);
    }

    #[test]
    fn recommendation_with_out_of_range_score_fails() {
        let result: Result<Recommendation, _> = serde_json::from_value(json!({
            "primaryRecommendation": "Take the offer",
            "confidenceScore": 140,
            "confidenceReasoning": "",
            "changeFactors": [],
            "reevaluationTimeline": ""
        }));
        assert!(result.is_err());
    }
}
