//! Application configuration module
//!
//! Configuration is read from environment variables (and a `.env` file when
//! present) using the `config` and `dotenvy` crates. Variables carry the
//! `DECISION_CONSOLE` prefix and nested values are separated by `__`.
//!
//! Every section has defaults, so an empty environment is a valid one.
//!
//! # Example
//!
//! ```no_run
//! use decision_console::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Using model {}", config.ai.model);
//! ```

mod ai;
mod error;
mod presentation;
mod session;

pub use ai::{AiConfig, FALLBACK_API_KEY_VAR, PLACEHOLDER_API_KEY};
pub use error::{ConfigError, ValidationError};
pub use presentation::PresentationConfig;
pub use session::{SessionConfig, SessionStoreKind};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Generative service settings
    #[serde(default)]
    pub ai: AiConfig,

    /// Where the onboarding session is kept
    #[serde(default)]
    pub session: SessionConfig,

    /// Terminal overrides
    #[serde(default)]
    pub presentation: PresentationConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `DECISION_CONSOLE__AI__MODEL=gemini-3-flash-preview` -> `ai.model`
    /// - `DECISION_CONSOLE__SESSION__STORE=file` -> `session.store`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its expected type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DECISION_CONSOLE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.session.validate()?;
        self.presentation.validate()?;
        Ok(())
    }
}
