//! Mock Generation Provider for testing.
//!
//! Provides a configurable mock implementation of the GenerationProvider
//! port, so the wizard can run end to end without calling a real service.
//!
//! # Features
//!
//! - Pre-configured replies, consumed in order
//! - Error injection for failure paths
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let provider = MockGenerationProvider::new()
//!     .with_json(json!({"objective": "Grow"}))
//!     .with_error(MockError::AuthenticationFailed);
//!
//! let reply = provider.generate_content(&request, GenerationOptions::default()).await?;
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::prompts::GenerationRequest;
use crate::ports::{GenerationOptions, GenerationProvider, ProviderError, ProviderInfo};

/// Reply text returned once the queue is empty.
pub const EXHAUSTED_REPLY: &str = "Mock response";

/// Mock generation provider for testing.
#[derive(Debug, Clone)]
pub struct MockGenerationProvider {
    /// Pre-configured replies (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Provider info to return.
    info: ProviderInfo,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

/// A configured mock reply.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return this text as the reply.
    Text(String),
    /// Fail with an error.
    Error(MockError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate rate limiting.
    RateLimited,
    /// Simulate a blocked prompt.
    ContentFiltered { reason: String },
    /// Simulate provider unavailable.
    Unavailable { message: String },
    /// Simulate a missing or rejected credential.
    AuthenticationFailed,
    /// Simulate network error.
    Network { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u64 },
}

impl From<MockError> for ProviderError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited => ProviderError::rate_limited("mock quota exhausted"),
            MockError::ContentFiltered { reason } => ProviderError::content_filtered(reason),
            MockError::Unavailable { message } => ProviderError::unavailable(message),
            MockError::AuthenticationFailed => ProviderError::AuthenticationFailed,
            MockError::Network { message } => ProviderError::network(message),
            MockError::Timeout { timeout_secs } => ProviderError::Timeout { timeout_secs },
        }
    }
}

/// One request the mock received.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub request: GenerationRequest,
    pub options: GenerationOptions,
}

impl Default for MockGenerationProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockGenerationProvider {
    /// Creates a new mock provider with an empty queue.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1"),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a raw text reply to the queue.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        lock(&self.responses).push_back(MockResponse::Text(content.into()));
        self
    }

    /// Adds a reply serialized from a JSON value.
    pub fn with_json(self, value: serde_json::Value) -> Self {
        self.with_response(value.to_string())
    }

    /// Adds an error to the queue.
    pub fn with_error(self, error: MockError) -> Self {
        lock(&self.responses).push_back(MockResponse::Error(error));
        self
    }

    /// Returns the number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    fn next_response(&self) -> MockResponse {
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| MockResponse::Text(EXHAUSTED_REPLY.to_string()))
    }
}

#[async_trait]
impl GenerationProvider for MockGenerationProvider {
    async fn generate_content(
        &self,
        request: &GenerationRequest,
        options: GenerationOptions,
    ) -> Result<String, ProviderError> {
        lock(&self.calls).push(RecordedCall {
            request: request.clone(),
            options,
        });

        match self.next_response() {
            MockResponse::Text(text) => Ok(text),
            MockResponse::Error(err) => Err(err.into()),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prompts::STRUCTURE_SCHEMA;
    use crate::domain::wizard::WizardStage;
    use serde_json::json;

    fn test_request() -> GenerationRequest {
        GenerationRequest::new(WizardStage::Structuring, "Hello", STRUCTURE_SCHEMA.clone())
    }

    async fn call(provider: &MockGenerationProvider) -> Result<String, ProviderError> {
        provider
            .generate_content(&test_request(), GenerationOptions::default())
            .await
    }

    #[tokio::test]
    async fn mock_provider_returns_replies_in_order() {
        let provider = MockGenerationProvider::new()
            .with_response("First")
            .with_json(json!({"n": 2}));

        assert_eq!(call(&provider).await.unwrap(), "First");
        assert_eq!(call(&provider).await.unwrap(), r#"{"n":2}"#);
    }

    #[tokio::test]
    async fn mock_provider_returns_default_after_exhausted() {
        let provider = MockGenerationProvider::new().with_response("Only one");

        call(&provider).await.unwrap();
        assert_eq!(call(&provider).await.unwrap(), EXHAUSTED_REPLY);
    }

    #[tokio::test]
    async fn mock_provider_returns_configured_error() {
        let provider = MockGenerationProvider::new()
            .with_error(MockError::RateLimited);

        let err = call(&provider).await.unwrap_err();
        assert!(err.is_transient());
        assert!(matches!(err, ProviderError::RateLimited(_)));
    }

    #[tokio::test]
    async fn mock_provider_tracks_calls() {
        let provider = MockGenerationProvider::new()
            .with_response("1")
            .with_response("2");

        assert_eq!(provider.call_count(), 0);
        call(&provider).await.unwrap();
        call(&provider).await.unwrap();
        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.get_calls()[0].request.prompt, "Hello");
        assert_eq!(provider.get_calls()[0].options.temperature, 0.5);
    }

    #[tokio::test]
    async fn clones_share_queue_and_history() {
        let provider = MockGenerationProvider::new().with_response("shared");
        let clone = provider.clone();

        assert_eq!(call(&clone).await.unwrap(), "shared");
        assert_eq!(provider.call_count(), 1);
        assert_eq!(call(&provider).await.unwrap(), EXHAUSTED_REPLY);
    }
}
