//! Text rendering for the console screens.
//!
//! Every view is built as a `String` so it can be checked without a
//! terminal; `print` is the only place that writes to stdout.

use console::{style, StyledObject};

use crate::application::{ActiveStage, DecisionConsole};
use crate::domain::analysis::{
    Assumption, AssumptionReliability, ConfidenceBand, ConfidenceScore, DecisionStructure,
    Recommendation, Scenario,
};
use crate::domain::session::UserContext;
use crate::domain::wizard::WizardStage;
use crate::ports::{DeviceClass, DeviceProfile};

pub const APP_TITLE: &str = "Decision Intelligence Console";

pub const FOOTER: &str =
    "This is a demo system. All data is temporary and will be cleared when you close this tab.";

pub const DECISION_PLACEHOLDER: &str =
    "e.g., Should I accept the new job offer at Company X or stay in my current role?";

const NO_ASSUMPTIONS_TITLE: &str = "No Key Assumptions Identified";

const NO_ASSUMPTIONS_BODY: &str = "The analysis didn't find significant implicit assumptions. \
This could mean your decision is straightforward or relies on widely accepted facts. \
You can proceed to the next step.";

/// Renders console state for one device profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    profile: DeviceProfile,
}

impl Renderer {
    pub fn new(profile: DeviceProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &DeviceProfile {
        &self.profile
    }

    fn is_narrow(&self) -> bool {
        self.profile.device_class.is_narrow()
    }

    fn indent(&self) -> &'static str {
        if self.is_narrow() {
            ""
        } else {
            "  "
        }
    }

    pub fn print(&self, text: &str) {
        println!("{}", text);
    }

    /// Welcome line and title.
    pub fn header(&self, user: &UserContext) -> String {
        format!(
            "{}\n{}",
            style(format!("Welcome, {}", user.name())).bold(),
            style(APP_TITLE).cyan()
        )
    }

    /// One line with the four stage names; the active one highlighted.
    ///
    /// Narrow terminals only get the active stage and its position.
    pub fn stepper(&self, active: WizardStage) -> String {
        if self.is_narrow() {
            return format!(
                "Step {}/{}: {}",
                active.index() + 1,
                WizardStage::ORDER.len(),
                style(active.title()).cyan().bold()
            );
        }

        let separator = style("  >  ").dim().to_string();
        WizardStage::ORDER
            .iter()
            .map(|stage| {
                let label = format!("{}. {}", stage.index() + 1, stage.title());
                if *stage == active {
                    style(label).cyan().bold().to_string()
                } else if *stage < active {
                    format!("{} {}", style("✓").green(), style(label).green())
                } else {
                    style(label).dim().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(separator.as_str())
    }

    pub fn error_banner(&self, message: &str) -> String {
        format!("{} {}", style("[!!]").red().bold(), style(message).red())
    }

    pub fn footer(&self) -> String {
        style(FOOTER).dim().to_string()
    }

    /// The full screen for the console's current state.
    pub fn screen(&self, console: &DecisionConsole) -> String {
        let mut sections = vec![
            self.header(console.user()),
            self.stepper(console.stage()),
        ];

        if let Some(message) = console.error_banner() {
            sections.push(self.error_banner(message));
        }

        sections.push(self.stage_view(console.active()));
        sections.push(self.footer());
        sections.join("\n\n")
    }

    /// Heading, intro text and whatever result the stage holds.
    pub fn stage_view(&self, active: &ActiveStage) -> String {
        let stage = active.stage();
        let mut out = format!(
            "{}\n{}",
            style(stage_heading(stage)).bold(),
            style(stage_intro(stage)).dim()
        );

        let body = match active {
            ActiveStage::Structuring(s) => {
                let mut body = String::new();
                if let Some(err) = s.input_error() {
                    body.push_str(&style(err.to_string()).red().to_string());
                }
                if let Some(structure) = s.result() {
                    if !body.is_empty() {
                        body.push_str("\n\n");
                    }
                    body.push_str(&self.structure(structure));
                }
                body
            }
            ActiveStage::Assumptions(s) => s.result().map(|a| self.assumptions(a)).unwrap_or_default(),
            ActiveStage::Scenarios(s) => s.result().map(|sc| self.scenarios(sc)).unwrap_or_default(),
            ActiveStage::Recommendation(s) => {
                s.result().map(|r| self.recommendation(r)).unwrap_or_default()
            }
            ActiveStage::Unavailable(_) => String::new(),
        };

        if !body.is_empty() {
            out.push_str("\n\n");
            out.push_str(&body);
        }
        out
    }

    pub fn structure(&self, structure: &DecisionStructure) -> String {
        [
            self.card("Objective", &[structure.objective.clone()]),
            self.card("Success Criteria", &structure.success_criteria),
            self.card("Constraints", &structure.constraints),
            self.card("Variables", &structure.variables),
        ]
        .join("\n\n")
    }

    pub fn assumptions(&self, assumptions: &[Assumption]) -> String {
        if assumptions.is_empty() {
            return format!(
                "{}\n{}{}",
                style(NO_ASSUMPTIONS_TITLE).bold(),
                self.indent(),
                style(NO_ASSUMPTIONS_BODY).dim()
            );
        }

        assumptions
            .iter()
            .map(|a| {
                let mut line = format!("{}{} {}", self.indent(), reliability_badge(a.reliability), a.text);
                if a.is_risky {
                    line.push(' ');
                    line.push_str(&style("[Risky]").red().bold().to_string());
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn scenarios(&self, scenarios: &[Scenario]) -> String {
        scenarios
            .iter()
            .map(|s| self.scenario(s))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn scenario(&self, scenario: &Scenario) -> String {
        let title = style(scenario.title.as_str()).bold().underlined();
        let pad = self.indent();
        if self.is_narrow() {
            format!(
                "{}\nOutcome: {}\nTime: {}\nEffort/Cost: {}\nRecovery: {}",
                title,
                scenario.outcome,
                scenario.time_impact,
                scenario.effort_cost,
                scenario.recovery_strategy
            )
        } else {
            format!(
                "{title}\n{pad}{} {}\n{pad}{} {} | {}\n{pad}{} {}",
                style("Outcome:").dim(),
                scenario.outcome,
                style("Time / Effort Impact:").dim(),
                scenario.time_impact,
                scenario.effort_cost,
                style("Recovery Strategy:").dim(),
                scenario.recovery_strategy
            )
        }
    }

    pub fn recommendation(&self, recommendation: &Recommendation) -> String {
        let mut sections = vec![
            self.card(
                "Primary Recommendation",
                &[recommendation.primary_recommendation.clone()],
            ),
            format!(
                "{}\n{}{}",
                style("Confidence Score").bold(),
                self.indent(),
                self.confidence_bar(recommendation.confidence_score)
            ),
            self.card("Reasoning", &[recommendation.confidence_reasoning.clone()]),
        ];

        if !recommendation.change_factors.is_empty() {
            sections.push(self.card("Change Factors", &recommendation.change_factors));
        }
        sections.push(self.card(
            "Re-evaluation Timeline",
            &[recommendation.reevaluation_timeline.clone()],
        ));
        sections.join("\n\n")
    }

    /// Horizontal meter coloured by band, followed by the percentage.
    pub fn confidence_bar(&self, score: ConfidenceScore) -> String {
        let width = self.bar_width();
        let filled = ((score.as_fraction() * width as f64).round() as usize).min(width);
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(width - filled));
        format!("{} {}", band_style(score.band(), bar), style(score).bold())
    }

    fn bar_width(&self) -> usize {
        match self.profile.device_class {
            DeviceClass::Mobile => 10,
            DeviceClass::Tablet => 20,
            DeviceClass::Desktop => 30,
        }
    }

    fn card(&self, title: &str, items: &[String]) -> String {
        let mut out = style(title).bold().to_string();
        match items {
            [single] => {
                out.push('\n');
                out.push_str(self.indent());
                out.push_str(single);
            }
            many => {
                for item in many {
                    out.push('\n');
                    out.push_str(self.indent());
                    out.push_str("• ");
                    out.push_str(item);
                }
            }
        }
        out
    }
}

pub const LOADING_TEXT: &str = "Analyzing...";

pub fn stage_heading(stage: WizardStage) -> &'static str {
    match stage {
        WizardStage::Structuring => "1. Decision Structuring",
        WizardStage::Assumptions => "2. Assumption Mapping",
        WizardStage::Scenarios => "3. Scenario Simulation",
        WizardStage::Recommendation => "4. Recommendation",
    }
}

fn stage_intro(stage: WizardStage) -> &'static str {
    match stage {
        WizardStage::Structuring => {
            "Start by clearly defining the decision you want to make. What is the core problem or choice?"
        }
        WizardStage::Assumptions => {
            "Here are the implicit assumptions underlying your decision. Weak or risky assumptions are where decisions often fail."
        }
        WizardStage::Scenarios => {
            "Let's explore potential futures. How could this decision play out under different conditions?"
        }
        WizardStage::Recommendation => {
            "Based on the analysis, here is a synthesized recommendation to guide your decision."
        }
    }
}

fn reliability_badge(reliability: AssumptionReliability) -> StyledObject<String> {
    let label = format!("[{}]", reliability.as_str());
    match reliability {
        AssumptionReliability::Strong => style(label).green(),
        AssumptionReliability::Medium => style(label).yellow(),
        AssumptionReliability::Weak => style(label).red(),
    }
}

fn band_style(band: ConfidenceBand, bar: String) -> StyledObject<String> {
    match band {
        ConfidenceBand::Low => style(bar).red(),
        ConfidenceBand::Moderate => style(bar).yellow(),
        ConfidenceBand::High => style(bar).cyan(),
    }
}
