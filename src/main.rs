use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use decision_console::adapters::ai::{GeminiConfig, GeminiProvider};
use decision_console::adapters::storage::{FileSessionStore, InMemorySessionStore};
use decision_console::adapters::terminal::{TerminalCapabilities, TerminalShell};
use decision_console::adapters::validation::ResponseSchemaValidator;
use decision_console::application::{GenerationClient, SessionService};
use decision_console::config::{AppConfig, SessionConfig, SessionStoreKind};
use decision_console::ports::{GenerationOptions, SessionStore};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    let mut gemini = GeminiConfig::from_secret(config.ai.api_key_or_placeholder())
        .with_model(config.ai.model.clone())
        .with_base_url(config.ai.base_url.clone());
    if let Some(timeout) = config.ai.timeout() {
        gemini = gemini.with_timeout(timeout);
    }
    let provider = GeminiProvider::new(gemini).context("Failed to build HTTP client")?;

    let client = GenerationClient::new(Arc::new(provider), Arc::new(ResponseSchemaValidator::new()))
        .with_options(GenerationOptions::with_temperature(config.ai.temperature));

    let sessions = SessionService::new(session_store(&config.session));

    let capabilities = TerminalCapabilities::new()
        .with_columns(config.presentation.columns)
        .with_reduced_motion(config.presentation.reduced_motion);

    tracing::info!(model = %config.ai.model, "Starting decision console");

    TerminalShell::new(sessions, client, Arc::new(capabilities))
        .run()
        .await
        .context("Terminal interaction failed")?;

    Ok(())
}

fn session_store(config: &SessionConfig) -> Arc<dyn SessionStore> {
    match config.store {
        SessionStoreKind::Memory => Arc::new(InMemorySessionStore::new()),
        SessionStoreKind::File => Arc::new(FileSessionStore::new(config.directory.clone())),
    }
}
