//! Interactive prompts built on dialoguer.

use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use crate::domain::session::{Goal, OnboardingForm, Role, TimeHorizon};

use super::renderer::DECISION_PLACEHOLDER;

/// Collects the onboarding form, or None when the user backs out.
///
/// A blank name is refused in place with the form's own message.
pub fn onboarding_form(theme: &ColorfulTheme) -> dialoguer::Result<Option<OnboardingForm>> {
    println!();
    println!("{}", style("Temporary Session Setup").bold());
    println!(
        "{}",
        style("This context helps personalize your analysis. No data is stored after you leave.")
            .dim()
    );
    println!();

    let name: String = Input::with_theme(theme)
        .with_prompt("First Name")
        .validate_with(|input: &String| -> Result<(), String> {
            OnboardingForm::new(input.as_str())
                .validate()
                .map_err(|e| e.to_string())
        })
        .interact_text()?;

    let role = select(theme, "Current Role", Role::all(), Role::default())?;
    let goal = select(theme, "Primary Goal", Goal::all(), Goal::default())?;
    let time_horizon = select(theme, "Time Horizon", TimeHorizon::all(), TimeHorizon::default())?;

    let proceed = Confirm::with_theme(theme)
        .with_prompt("Start session?")
        .default(true)
        .interact()?;

    Ok(proceed.then(|| {
        OnboardingForm::new(name.trim())
            .with_role(role)
            .with_goal(goal)
            .with_time_horizon(time_horizon)
    }))
}

fn select<T>(theme: &ColorfulTheme, prompt: &str, options: &[T], default: T) -> dialoguer::Result<T>
where
    T: Copy + PartialEq + ToString,
{
    let default_index = options.iter().position(|o| *o == default).unwrap_or(0);
    let index = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(options)
        .default(default_index)
        .interact()?;
    Ok(options.get(index).copied().unwrap_or(default))
}

/// Asks for the decision text, pre-filled with the current value.
///
/// Empty input is passed through so the stage can reject it inline.
pub fn decision_text(theme: &ColorfulTheme, current: &str) -> dialoguer::Result<String> {
    println!("{}", style(DECISION_PLACEHOLDER).dim());
    Input::with_theme(theme)
        .with_prompt("Your decision")
        .allow_empty(true)
        .with_initial_text(current)
        .interact_text()
}

/// Picks one of `labels`, returning its index.
pub fn choose(theme: &ColorfulTheme, labels: &[String]) -> dialoguer::Result<usize> {
    Select::with_theme(theme)
        .with_prompt("Next")
        .items(labels)
        .default(0)
        .interact()
}
