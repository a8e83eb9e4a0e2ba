//! Domain layer containing the wizard's business logic and types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, errors, state machine trait)
//! - `session` - Onboarding and the per-session user context
//! - `analysis` - Typed stage results and the accumulated analysis record
//! - `wizard` - Stage progression and the wizard controller
//! - `prompts` - Prompt text and response schemas for each stage

pub mod analysis;
pub mod foundation;
pub mod prompts;
pub mod session;
pub mod wizard;
