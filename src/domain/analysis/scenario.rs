//! Scenarios produced by the simulation stage and their canonical order.
//!
//! The model returns scenarios in whatever order it likes and may invent or
//! omit titles. [`canonicalize`] turns that raw list into the display order
//! `[Best Case, Base Case, Failure Case]`:
//!
//! - scenarios whose title is not one of the three are dropped silently
//! - a missing title leaves a gap that is never filled
//! - if a title repeats, the first occurrence wins

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three scenario kinds, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScenarioTitle {
    #[serde(rename = "Best Case")]
    BestCase,
    #[serde(rename = "Base Case")]
    BaseCase,
    #[serde(rename = "Failure Case")]
    FailureCase,
}

impl ScenarioTitle {
    /// Canonical display order.
    pub const ORDER: [ScenarioTitle; 3] = [
        ScenarioTitle::BestCase,
        ScenarioTitle::BaseCase,
        ScenarioTitle::FailureCase,
    ];

    /// Wire values, in canonical order.
    pub const WIRE_VALUES: [&'static str; 3] = ["Best Case", "Base Case", "Failure Case"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioTitle::BestCase => "Best Case",
            ScenarioTitle::BaseCase => "Base Case",
            ScenarioTitle::FailureCase => "Failure Case",
        }
    }

    /// Parses an exact wire title.
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ORDER.into_iter().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for ScenarioTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scenario exactly as the model returned it, title still unchecked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDraft {
    pub title: String,
    pub outcome: String,
    pub time_impact: String,
    pub effort_cost: String,
    pub recovery_strategy: String,
}

/// A simulated scenario with a recognised title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub title: ScenarioTitle,
    pub outcome: String,
    pub time_impact: String,
    pub effort_cost: String,
    /// Only meaningful for the failure case; often "N/A" elsewhere.
    pub recovery_strategy: String,
}

impl From<Scenario> for ScenarioDraft {
    fn from(s: Scenario) -> Self {
        Self {
            title: s.title.as_str().to_string(),
            outcome: s.outcome,
            time_impact: s.time_impact,
            effort_cost: s.effort_cost,
            recovery_strategy: s.recovery_strategy,
        }
    }
}

/// Filters and reorders raw scenarios into `[Best, Base, Failure]`.
pub fn canonicalize(drafts: Vec<ScenarioDraft>) -> Vec<Scenario> {
    let mut slots: [Option<Scenario>; 3] = [None, None, None];

    for draft in drafts {
        let Some(title) = ScenarioTitle::from_wire(&draft.title) else {
            tracing::debug!(title = %draft.title, "Dropping scenario with unknown title");
            continue;
        };
        let slot = &mut slots[title as usize];
        if slot.is_none() {
            *slot = Some(Scenario {
                title,
                outcome: draft.outcome,
                time_impact: draft.time_impact,
                effort_cost: draft.effort_cost,
                recovery_strategy: draft.recovery_strategy,
            });
        }
    }

    slots.into_iter().flatten().collect()
}

/// Finds the scenario with the given title.
pub fn find_by_title(scenarios: &[Scenario], title: ScenarioTitle) -> Option<&Scenario> {
    scenarios.iter().find(|s| s.title == title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn draft(title: &str) -> ScenarioDraft {
        ScenarioDraft {
            title: title.to_string(),
            outcome: format!("{} outcome", title),
            time_impact: "months".to_string(),
            effort_cost: "moderate".to_string(),
            recovery_strategy: "N/A".to_string(),
        }
    }

    fn titles(scenarios: &[Scenario]) -> Vec<ScenarioTitle> {
        scenarios.iter().map(|s| s.title).collect()
    }

    #[test]
    fn reorders_to_canonical_order() {
        let result = canonicalize(vec![
            draft("Failure Case"),
            draft("Best Case"),
            draft("Base Case"),
        ]);
        assert_eq!(titles(&result), ScenarioTitle::ORDER.to_vec());
    }

    #[test]
    fn missing_title_is_not_filled() {
        let result = canonicalize(vec![draft("Base Case"), draft("Best Case")]);
        assert_eq!(
            titles(&result),
            vec![ScenarioTitle::BestCase, ScenarioTitle::BaseCase]
        );
    }

    #[test]
    fn unknown_titles_are_dropped() {
        let result = canonicalize(vec![
            draft("Worst Case"),
            draft("Failure Case"),
            draft("best case"),
        ]);
        assert_eq!(titles(&result), vec![ScenarioTitle::FailureCase]);
    }

    #[test]
    fn first_duplicate_wins() {
        let mut second = draft("Best Case");
        second.outcome = "second".to_string();
        let result = canonicalize(vec![draft("Best Case"), second]);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].outcome, "Best Case outcome");
    }

    #[test]
    fn title_serializes_with_spaces() {
        let json = serde_json::to_string(&ScenarioTitle::FailureCase).unwrap();
        assert_eq!(json, "\"Failure Case\"");
    }

    fn arb_draft_title() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("Best Case".to_string()),
            Just("Base Case".to_string()),
            Just("Failure Case".to_string()),
            "[A-Za-z ]{0,12}",
        ]
    }

    proptest! {
        #[test]
        fn any_permutation_of_known_titles_is_canonical(
            order in Just(vec![0usize, 1, 2]).prop_shuffle(),
            noise in proptest::collection::vec("[a-z]{1,8} [A-Z][a-z]{1,6}", 0..4),
        ) {
            let mut drafts: Vec<ScenarioDraft> =
                order.iter().map(|&i| draft(ScenarioTitle::WIRE_VALUES[i])).collect();
            for (i, n) in noise.iter().enumerate() {
                drafts.insert(i % (drafts.len() + 1), draft(n));
            }

            let result = canonicalize(drafts);
            prop_assert_eq!(titles(&result), ScenarioTitle::ORDER.to_vec());
        }

        #[test]
        fn canonicalize_is_idempotent(
            raw in proptest::collection::vec(arb_draft_title(), 0..8),
        ) {
            let once = canonicalize(raw.iter().map(|t| draft(t)).collect());
            let twice = canonicalize(once.iter().cloned().map(ScenarioDraft::from).collect());
            prop_assert_eq!(once.clone(), twice);

            let ts = titles(&once);
            let mut sorted = ts.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(ts, sorted);
        }
    }
}
