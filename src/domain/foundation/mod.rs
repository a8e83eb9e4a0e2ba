//! Foundation module - Shared domain primitives.
//!
//! Contains the session identifier, the state machine trait and the
//! validation error type shared by the rest of the domain.

mod errors;
mod ids;
mod state_machine;

pub use errors::ValidationError;
pub use ids::SessionId;
pub use state_machine::StateMachine;
