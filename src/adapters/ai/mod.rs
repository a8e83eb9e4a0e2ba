//! Generation Provider Adapters.
//!
//! Implementations of the GenerationProvider port.
//!
//! ## Available Adapters
//!
//! - `GeminiProvider` - Google Gemini `generateContent` with structured output
//! - `MockGenerationProvider` - Configurable mock for testing

mod gemini_provider;
mod mock_provider;

pub use gemini_provider::{GeminiConfig, GeminiProvider, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use mock_provider::{MockError, MockGenerationProvider, MockResponse, RecordedCall};
