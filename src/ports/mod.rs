//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `GenerationProvider` - The generative-text service
//! - `ResponseValidator` - Checks generated JSON against a response schema
//! - `SessionStore` - Keeps the onboarding session for the current run
//! - `CapabilityQuery` - What the presentation surface can do

mod capabilities;
mod generation_provider;
mod schema_validator;
mod session_store;

pub use capabilities::{CapabilityQuery, DeviceClass, DeviceProfile};
pub use generation_provider::{GenerationOptions, GenerationProvider, ProviderError, ProviderInfo};
pub use schema_validator::{ResponseValidator, SchemaValidationError};
pub use session_store::{SessionStore, StorageError, SESSION_KEY};
