//! Application layer - orchestration over the domain and the ports.
//!
//! - `GenerationClient` - one validated, typed exchange with the provider
//! - `stages` - the four stage components
//! - `DecisionConsole` - mounts stages, merges results, owns the error banner
//! - `SessionService` - onboarding, restore and end of a session

mod console;
mod generation_client;
mod session_service;
pub mod stages;

pub use console::{ActiveStage, DecisionConsole, RunOutcome};
pub use generation_client::{
    GenerationClient, GenerationFailure, GenerationFailureKind, GENERATION_FAILURE_MESSAGE,
};
pub use session_service::SessionService;
