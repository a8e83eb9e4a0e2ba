//! Terminal presentation overrides

use serde::Deserialize;

use super::error::ValidationError;

const MIN_COLUMNS: u16 = 20;

/// Overrides for what the terminal reports about itself
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PresentationConfig {
    /// Force reduced motion on or off
    #[serde(default)]
    pub reduced_motion: Option<bool>,

    /// Pretend the terminal is this wide
    #[serde(default)]
    pub columns: Option<u16>,
}

impl PresentationConfig {
    /// Validate presentation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.columns {
            Some(columns) if columns < MIN_COLUMNS => Err(ValidationError::InvalidColumns),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_overrides_by_default() {
        let config = PresentationConfig::default();
        assert_eq!(config.reduced_motion, None);
        assert_eq!(config.columns, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_tiny_width_is_rejected() {
        let config = PresentationConfig {
            columns: Some(10),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidColumns)));
    }
}
