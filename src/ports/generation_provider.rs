//! Generation Provider Port - Interface for the generative-text service.
//!
//! The application sends one prompt plus a response schema per wizard stage
//! and receives the raw reply text. Parsing and validating that text is the
//! generation client's job, not the provider's.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct EchoProvider;
//!
//! #[async_trait]
//! impl GenerationProvider for EchoProvider {
//!     async fn generate_content(
//!         &self,
//!         request: &GenerationRequest,
//!         _options: GenerationOptions,
//!     ) -> Result<String, ProviderError> {
//!         Ok("{}".to_string())
//!     }
//!
//!     fn provider_info(&self) -> ProviderInfo {
//!         ProviderInfo::new("echo", "none")
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::prompts::GenerationRequest;

/// Port for structured-output generation.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Sends the prompt and schema, returning the reply text untouched.
    async fn generate_content(
        &self,
        request: &GenerationRequest,
        options: GenerationOptions,
    ) -> Result<String, ProviderError>;

    /// Get provider information (name, model).
    fn provider_info(&self) -> ProviderInfo;
}

/// Sampling options sent with every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    /// Response randomness (0.0 = deterministic).
    pub temperature: f32,
}

impl GenerationOptions {
    pub const DEFAULT_TEMPERATURE: f32 = 0.5;

    pub fn with_temperature(temperature: f32) -> Self {
        Self { temperature }
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: Self::DEFAULT_TEMPERATURE,
        }
    }
}

/// Provider information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Provider name (e.g., "gemini", "mock").
    pub name: String,
    /// Model identifier.
    pub model: String,
}

impl ProviderInfo {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Generation provider errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// Rate limited by provider.
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// Content was blocked by the provider's safety filter.
    #[error("content filtered: {reason}")]
    ContentFiltered { reason: String },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable { message: String },

    /// API key missing, invalid or rejected.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse the provider envelope.
    #[error("parse error: {0}")]
    Parse(String),

    /// The provider rejected the request as malformed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
}

impl ProviderError {
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited(message.into())
    }

    pub fn content_filtered(reason: impl Into<String>) -> Self {
        Self::ContentFiltered {
            reason: reason.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Returns true if trying again later could succeed.
    ///
    /// Nothing retries automatically; the flag is logged with the failure.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ProviderError::RateLimited(_)
                | ProviderError::Unavailable { .. }
                | ProviderError::Network(_)
                | ProviderError::Timeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_use_half_temperature() {
        assert_eq!(GenerationOptions::default().temperature, 0.5);
        assert_eq!(GenerationOptions::with_temperature(0.2).temperature, 0.2);
    }

    #[test]
    fn transient_errors() {
        assert!(ProviderError::rate_limited("quota").is_transient());
        assert!(ProviderError::network("reset").is_transient());
        assert!(ProviderError::Timeout { timeout_secs: 5 }.is_transient());
        assert!(!ProviderError::AuthenticationFailed.is_transient());
        assert!(!ProviderError::parse("bad").is_transient());
    }

    #[test]
    fn error_messages_are_descriptive() {
        assert_eq!(
            ProviderError::rate_limited("quota exceeded").to_string(),
            "rate limited: quota exceeded"
        );
        assert_eq!(
            ProviderError::unavailable("503").to_string(),
            "provider unavailable: 503"
        );
    }
}
