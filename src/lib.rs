//! Decision Console - guided decision support over a generative model
//!
//! A four-stage wizard (structuring, assumptions, scenarios, recommendation)
//! where each stage sends one structured-output request and merges the typed
//! reply into a shared analysis record.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
