//! Interactive loop: onboarding, the wizard, and the session menu.

use std::sync::Arc;

use dialoguer::theme::ColorfulTheme;

use crate::application::{ActiveStage, DecisionConsole, GenerationClient, RunOutcome, SessionService};
use crate::domain::session::UserContext;
use crate::domain::wizard::{StageStatus, WizardStage};
use crate::ports::CapabilityQuery;

use super::input;
use super::renderer::Renderer;
use super::spinner::AnalyzingSpinner;

/// Something the user can pick from the menu under a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Enter the decision text and run structuring.
    StructureDecision,
    /// Edit the decision text and run structuring again.
    Reanalyze,
    /// Confirm the ready result and move to `to`.
    Proceed { to: WizardStage },
    NewDecision,
    EndSession,
    Quit,
}

impl Action {
    pub fn label(&self) -> String {
        match self {
            Action::StructureDecision => "Structure Decision".to_string(),
            Action::Reanalyze => "Edit Decision & Re-analyze".to_string(),
            Action::Proceed { to: WizardStage::Assumptions } => {
                "Confirm & Proceed to Assumptions".to_string()
            }
            Action::Proceed { to } => format!("Proceed to {}", to.title()),
            Action::NewDecision => "New Decision".to_string(),
            Action::EndSession => "End Session".to_string(),
            Action::Quit => "Quit".to_string(),
        }
    }
}

/// Menu entries offered for the console's current state.
///
/// Stages after the first have no retry entry; a failure there is left
/// through "New Decision".
pub fn available_actions(console: &DecisionConsole) -> Vec<Action> {
    let active = console.active();
    let ready = active.status() == StageStatus::Ready;
    let proceed = console.stage().next().map(|to| Action::Proceed { to });

    let mut actions = match active {
        ActiveStage::Structuring(_) if ready => proceed.into_iter().chain([Action::Reanalyze]).collect(),
        ActiveStage::Structuring(_) => vec![Action::StructureDecision],
        ActiveStage::Assumptions(_) | ActiveStage::Scenarios(_) if ready => {
            proceed.into_iter().collect()
        }
        _ => Vec::new(),
    };

    actions.extend([Action::NewDecision, Action::EndSession, Action::Quit]);
    actions
}

enum ConsoleExit {
    EndSession,
    Quit,
}

/// Drives the terminal UI until the user quits.
pub struct TerminalShell {
    sessions: SessionService,
    client: GenerationClient,
    capabilities: Arc<dyn CapabilityQuery>,
    theme: ColorfulTheme,
}

impl TerminalShell {
    pub fn new(
        sessions: SessionService,
        client: GenerationClient,
        capabilities: Arc<dyn CapabilityQuery>,
    ) -> Self {
        Self {
            sessions,
            client,
            capabilities,
            theme: ColorfulTheme::default(),
        }
    }

    fn renderer(&self) -> Renderer {
        Renderer::new(self.capabilities.device_profile())
    }

    /// Restores or creates a session, then runs the console. Ending a
    /// session returns to onboarding.
    pub async fn run(&self) -> dialoguer::Result<()> {
        loop {
            let user = match self.sessions.current().await {
                Some(user) => {
                    tracing::info!(session_id = %user.session_id(), "Restored session");
                    user
                }
                None => match self.onboard().await? {
                    Some(user) => user,
                    None => return Ok(()),
                },
            };

            match self.run_console(user).await? {
                ConsoleExit::EndSession => self.sessions.end().await,
                ConsoleExit::Quit => return Ok(()),
            }
        }
    }

    async fn onboard(&self) -> dialoguer::Result<Option<UserContext>> {
        loop {
            let Some(form) = input::onboarding_form(&self.theme)? else {
                return Ok(None);
            };
            match self.sessions.start(form).await {
                Ok(user) => return Ok(Some(user)),
                Err(e) => self.renderer().print(&self.renderer().error_banner(&e.to_string())),
            }
        }
    }

    async fn run_console(&self, user: UserContext) -> dialoguer::Result<ConsoleExit> {
        let mut console = DecisionConsole::new(self.client.clone(), user);

        loop {
            let renderer = self.renderer();
            renderer.print("");
            renderer.print(&renderer.screen(&console));

            if console.should_autoload() {
                self.run_stage(&mut console, &renderer).await;
                continue;
            }

            let actions = available_actions(&console);
            let labels: Vec<String> = actions.iter().map(Action::label).collect();
            let choice = input::choose(&self.theme, &labels)?;

            match actions.get(choice).copied().unwrap_or(Action::Quit) {
                Action::StructureDecision | Action::Reanalyze => {
                    let current = match console.active() {
                        ActiveStage::Structuring(stage) => stage.decision().to_string(),
                        _ => String::new(),
                    };
                    let text = input::decision_text(&self.theme, &current)?;
                    console.set_decision(text);
                    self.run_stage(&mut console, &renderer).await;
                }
                Action::Proceed { .. } => {
                    console.confirm();
                }
                Action::NewDecision => console.new_decision(),
                Action::EndSession => return Ok(ConsoleExit::EndSession),
                Action::Quit => return Ok(ConsoleExit::Quit),
            }
        }
    }

    async fn run_stage(&self, console: &mut DecisionConsole, renderer: &Renderer) {
        let spinner = AnalyzingSpinner::start(renderer.profile());
        let outcome = console.run_active().await;
        spinner.finish();

        tracing::debug!(stage = %console.stage(), ?outcome, "Stage run finished");
        if outcome == RunOutcome::Completed {
            tracing::info!("Recommendation ready");
        }
    }
}
