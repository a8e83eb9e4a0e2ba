//! Session Store Port - Interface for keeping the user's session around.
//!
//! A tab-scoped key/value store in spirit: one process run, one saved
//! session. Neither implementation is a system of record.

use async_trait::async_trait;

/// Key under which the user session is saved.
pub const SESSION_KEY: &str = "userSession";

/// Errors that can occur during session storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to serialize session: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize session: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::IoError(err.to_string())
    }
}

/// Port for saving and restoring raw session payloads by key.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing what was there.
    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    async fn clear(&self, key: &str) -> Result<(), StorageError>;
}
