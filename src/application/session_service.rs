//! SessionService - onboarding, restore and end of a user session.

use std::sync::Arc;

use crate::domain::foundation::ValidationError;
use crate::domain::session::{OnboardingForm, UserContext};
use crate::ports::{SessionStore, SESSION_KEY};

/// Session lifecycle over a `SessionStore`.
///
/// Storage problems are logged and swallowed: the session lives on in
/// memory for the current run either way.
pub struct SessionService {
    store: Arc<dyn SessionStore>,
}

impl SessionService {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Validates the onboarding form and saves the new session.
    pub async fn start(&self, form: OnboardingForm) -> Result<UserContext, ValidationError> {
        let user = form.submit()?;

        match serde_json::to_string(&user) {
            Ok(json) => {
                if let Err(e) = self.store.write(SESSION_KEY, &json).await {
                    tracing::warn!(error = %e, "Failed to save session");
                }
            }
            Err(e) => tracing::warn!(error = %e, "Failed to serialize session"),
        }

        tracing::info!(session_id = %user.session_id(), "Session started");
        Ok(user)
    }

    /// The saved session, if there is a readable one.
    pub async fn current(&self) -> Option<UserContext> {
        let raw = match self.store.read(SESSION_KEY).await {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read session");
                return None;
            }
        };

        match serde_json::from_str::<UserContext>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring corrupt session data");
                None
            }
        }
    }

    /// Discards the saved session.
    pub async fn end(&self) {
        match self.store.clear(SESSION_KEY).await {
            Ok(()) => tracing::info!("Session ended"),
            Err(e) => tracing::warn!(error = %e, "Failed to clear session"),
        }
    }
}
