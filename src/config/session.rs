//! Session storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the onboarding session is kept
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionStoreKind {
    /// Gone when the process exits
    #[default]
    Memory,
    /// One JSON file under `directory`
    File,
}

/// Session storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub store: SessionStoreKind,

    /// Directory for the file store
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

impl SessionConfig {
    pub fn is_persistent(&self) -> bool {
        self.store == SessionStoreKind::File
    }

    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.is_persistent() && self.directory.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("SESSION__DIRECTORY"));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            store: SessionStoreKind::default(),
            directory: default_directory(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from(".decision-console")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_memory() {
        let config = SessionConfig::default();
        assert_eq!(config.store, SessionStoreKind::Memory);
        assert!(!config.is_persistent());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_store_needs_directory() {
        let config = SessionConfig {
            store: SessionStoreKind::File,
            directory: PathBuf::new(),
        };
        assert!(config.validate().is_err());
    }
}
