//! GenerationClient - one structured request/response exchange.
//!
//! Sends a `GenerationRequest` through the provider port, then trims,
//! parses, validates and decodes the reply. Every way this can go wrong
//! collapses into a single user-facing `GenerationFailure`; the `kind`
//! it carries is for logs and tests only.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::prompts::GenerationRequest;
use crate::ports::{GenerationOptions, GenerationProvider, ResponseValidator};

/// The only message a user ever sees for a failed generation call.
pub const GENERATION_FAILURE_MESSAGE: &str =
    "Failed to get a valid response from the AI. Please try again.";

/// Where a generation call went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationFailureKind {
    /// The request was unusable before anything was sent.
    InvalidRequest,
    /// The provider call itself failed (network, status, envelope).
    Transport,
    /// The reply text was not JSON.
    Parse,
    /// The JSON did not match the schema or the target type.
    Schema,
}

/// A failed generation call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Failed to get a valid response from the AI. Please try again.")]
pub struct GenerationFailure {
    kind: GenerationFailureKind,
    detail: String,
}

impl GenerationFailure {
    pub fn new(kind: GenerationFailureKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    pub fn kind(&self) -> GenerationFailureKind {
        self.kind
    }

    /// Diagnostic detail for logs. Never shown to the user.
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

/// Structured generation over a provider and a validator.
#[derive(Clone)]
pub struct GenerationClient {
    provider: Arc<dyn GenerationProvider>,
    validator: Arc<dyn ResponseValidator>,
    options: GenerationOptions,
}

impl GenerationClient {
    pub fn new(
        provider: Arc<dyn GenerationProvider>,
        validator: Arc<dyn ResponseValidator>,
    ) -> Self {
        Self {
            provider,
            validator,
            options: GenerationOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> GenerationOptions {
        self.options
    }

    /// Runs one exchange and decodes the reply into `T`.
    ///
    /// No retry and no caching: each call reaches the provider exactly once,
    /// unless the request is malformed, in which case it never does. A
    /// request is malformed when its prompt is blank or its schema is not an
    /// object (or array of objects) with required fields.
    pub async fn generate<T: DeserializeOwned>(
        &self,
        request: &GenerationRequest,
    ) -> Result<T, GenerationFailure> {
        self.try_generate(request).await.map_err(|failure| {
            tracing::error!(
                stage = %request.stage,
                kind = ?failure.kind(),
                detail = %failure.detail(),
                "Generation call failed"
            );
            failure
        })
    }

    async fn try_generate<T: DeserializeOwned>(
        &self,
        request: &GenerationRequest,
    ) -> Result<T, GenerationFailure> {
        if request.is_blank() {
            return Err(GenerationFailure::new(
                GenerationFailureKind::InvalidRequest,
                "prompt is empty",
            ));
        }

        if !request.schema.is_structured() || request.schema.required_fields().is_empty() {
            return Err(GenerationFailure::new(
                GenerationFailureKind::InvalidRequest,
                format!(
                    "schema must be an object or array of objects with required fields, got {}",
                    request.schema.schema_type
                ),
            ));
        }

        tracing::debug!(
            stage = %request.stage,
            provider = %self.provider.provider_info().name,
            prompt = %request.prompt,
            "Requesting generation"
        );

        let reply = self
            .provider
            .generate_content(request, self.options)
            .await
            .map_err(|e| {
                tracing::warn!(
                    stage = %request.stage,
                    transient = e.is_transient(),
                    error = %e,
                    "Provider call failed"
                );
                GenerationFailure::new(GenerationFailureKind::Transport, e.to_string())
            })?;

        let value: Value = serde_json::from_str(reply.trim())
            .map_err(|e| GenerationFailure::new(GenerationFailureKind::Parse, e.to_string()))?;

        self.validator
            .validate(&request.schema, &value)
            .map_err(|e| GenerationFailure::new(GenerationFailureKind::Schema, e.to_string()))?;

        serde_json::from_value(value)
            .map_err(|e| GenerationFailure::new(GenerationFailureKind::Schema, e.to_string()))
    }
}
