//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `ai` - Gemini provider and a scripted mock
//! - `storage` - in-memory and file session stores
//! - `terminal` - capability detection, rendering and the interactive shell
//! - `validation` - response schema validation

pub mod ai;
pub mod storage;
pub mod terminal;
pub mod validation;
