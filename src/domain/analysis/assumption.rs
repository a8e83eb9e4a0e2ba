//! Assumptions surfaced by the mapping stage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How well-founded an assumption is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssumptionReliability {
    Strong,
    Medium,
    Weak,
}

impl AssumptionReliability {
    /// Wire values, in the order the schema lists them.
    pub const WIRE_VALUES: [&'static str; 3] = ["Strong", "Medium", "Weak"];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssumptionReliability::Strong => "Strong",
            AssumptionReliability::Medium => "Medium",
            AssumptionReliability::Weak => "Weak",
        }
    }
}

impl fmt::Display for AssumptionReliability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An implicit assumption behind the decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assumption {
    #[serde(rename = "assumption")]
    pub text: String,
    pub reliability: AssumptionReliability,
    /// The decision fails if this assumption turns out wrong.
    pub is_risky: bool,
}

impl Assumption {
    pub fn new(
        text: impl Into<String>,
        reliability: AssumptionReliability,
        is_risky: bool,
    ) -> Self {
        Self {
            text: text.into(),
            reliability,
            is_risky,
        }
    }

    /// Risky or weak assumptions are the ones the recommendation weighs.
    pub fn needs_attention(&self) -> bool {
        self.is_risky || self.reliability == AssumptionReliability::Weak
    }
}
