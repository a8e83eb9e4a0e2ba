//! Terminal presentation shell.
//!
//! - `TerminalCapabilities` - device class and motion preference from the tty
//! - `Renderer` - screens as styled text
//! - `AnalyzingSpinner` - the loading indicator
//! - `TerminalShell` - the interactive loop over the application layer

mod capabilities;
mod input;
mod renderer;
mod shell;
mod spinner;

pub use capabilities::{TerminalCapabilities, NO_MOTION_VAR};
pub use renderer::{stage_heading, Renderer, APP_TITLE, DECISION_PLACEHOLDER, FOOTER, LOADING_TEXT};
pub use shell::{available_actions, Action, TerminalShell};
pub use spinner::AnalyzingSpinner;
