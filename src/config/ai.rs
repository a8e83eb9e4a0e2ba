//! Generative service configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Substituted when no API key is configured, so startup still succeeds.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY";

/// Plain environment variable consulted when the prefixed key is unset.
pub const FALLBACK_API_KEY_VAR: &str = "API_KEY";

/// Generative service configuration
#[derive(Debug, Deserialize)]
pub struct AiConfig {
    /// Gemini API key
    pub api_key: Option<Secret<String>>,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Request timeout in seconds; unset or 0 disables it
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl AiConfig {
    /// Get timeout as Duration, if one is set
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// The API key to use, falling back to `API_KEY` and then a placeholder.
    ///
    /// The placeholder keeps startup working; calls made with it fail at
    /// request time.
    pub fn api_key_or_placeholder(&self) -> Secret<String> {
        self.resolve_api_key(std::env::var(FALLBACK_API_KEY_VAR).ok())
    }

    fn resolve_api_key(&self, fallback: Option<String>) -> Secret<String> {
        if let Some(key) = self.api_key.as_ref().filter(|_| self.has_api_key()) {
            return Secret::new(key.expose_secret().clone());
        }

        match fallback.filter(|k| !k.trim().is_empty()) {
            Some(key) => Secret::new(key),
            None => {
                tracing::warn!("API key not set. Using a placeholder.");
                Secret::new(PLACEHOLDER_API_KEY.to_string())
            }
        }
    }

    /// Validate generative service configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.model.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AI__MODEL"));
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ValidationError::InvalidBaseUrl);
        }

        if !self.temperature.is_finite() || !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }

        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            temperature: default_temperature(),
            timeout_secs: None,
        }
    }
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_temperature() -> f32 {
    0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.model, "gemini-3-flash-preview");
        assert_eq!(config.temperature, 0.5);
        assert_eq!(config.timeout(), None);
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_timeout_duration() {
        let config = AiConfig {
            timeout_secs: Some(60),
            ..Default::default()
        };
        assert_eq!(config.timeout(), Some(Duration::from_secs(60)));

        let disabled = AiConfig {
            timeout_secs: Some(0),
            ..Default::default()
        };
        assert_eq!(disabled.timeout(), None);
    }

    #[test]
    fn test_configured_key_wins() {
        let config = AiConfig {
            api_key: Some(Secret::new("configured".to_string())),
            ..Default::default()
        };
        let key = config.resolve_api_key(Some("fallback".to_string()));
        assert_eq!(key.expose_secret(), "configured");
    }

    #[test]
    fn test_fallback_then_placeholder() {
        let config = AiConfig {
            api_key: Some(Secret::new("  ".to_string())),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_api_key(Some("fallback".to_string())).expose_secret(),
            "fallback"
        );
        assert_eq!(
            config.resolve_api_key(None).expose_secret(),
            PLACEHOLDER_API_KEY
        );
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(AiConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let empty_model = AiConfig {
            model: " ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            empty_model.validate(),
            Err(ValidationError::MissingRequired(_))
        ));

        let bad_url = AiConfig {
            base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(matches!(bad_url.validate(), Err(ValidationError::InvalidBaseUrl)));

        for temperature in [-0.1, 2.5, f32::NAN] {
            let config = AiConfig {
                temperature,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ValidationError::InvalidTemperature)
            ));
        }
    }
}
