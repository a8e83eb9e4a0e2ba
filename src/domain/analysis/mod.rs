//! Analysis module - the typed results each wizard stage produces.
//!
//! - `structure` - objective, constraints, variables, success criteria
//! - `assumption` - implicit assumptions with reliability ratings
//! - `scenario` - best/base/failure simulations and their canonical order
//! - `recommendation` - final advice with a confidence score
//! - `record` - the accumulated record and the patches that fill it

mod assumption;
mod record;
mod recommendation;
mod scenario;
mod structure;

pub use assumption::{Assumption, AssumptionReliability};
pub use record::{AnalysisPatch, AnalysisRecord};
pub use recommendation::{ConfidenceBand, ConfidenceScore, Recommendation};
pub use scenario::{canonicalize, find_by_title, Scenario, ScenarioDraft, ScenarioTitle};
pub use structure::DecisionStructure;
