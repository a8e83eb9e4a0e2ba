//! Session identifier value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier for one console session.
///
/// Generated ids look like `temp_1718000000000_k3x9a0b`: a `temp_` prefix,
/// the creation time in unix milliseconds and seven random lowercase
/// alphanumerics. Restored ids are accepted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Generates a new temporary session id.
    pub fn new() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        let suffix: String = Uuid::new_v4().simple().to_string().chars().take(7).collect();
        Self(format!("temp_{}_{}", millis, suffix))
    }

    /// Wraps an existing id string.
    pub fn from_string(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
