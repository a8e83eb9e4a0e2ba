//! Wizard module - the four-stage state machine.
//!
//! - `stage` - stage order, prerequisites and per-stage behaviour
//! - `stage_status` - Idle/Loading/Ready/Failed lifecycle of one stage
//! - `controller` - stage index plus the accumulated analysis record

mod controller;
mod stage;
mod stage_status;

pub use controller::WizardController;
pub use stage::{Prerequisite, WizardStage};
pub use stage_status::StageStatus;
