//! "Analyzing..." indicator shown while a generation call is in flight.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::ports::DeviceProfile;

use super::renderer::LOADING_TEXT;

/// Animated spinner, or a single static line under reduced motion.
pub struct AnalyzingSpinner {
    bar: Option<ProgressBar>,
}

impl AnalyzingSpinner {
    #[must_use]
    pub fn start(profile: &DeviceProfile) -> Self {
        if profile.prefers_reduced_motion {
            println!("{}", style(LOADING_TEXT).cyan());
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        match ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            Ok(spinner_style) => bar.set_style(spinner_style),
            Err(e) => tracing::debug!(error = %e, "Falling back to default spinner style"),
        }
        bar.enable_steady_tick(Duration::from_millis(120));
        bar.set_message(LOADING_TEXT);

        Self { bar: Some(bar) }
    }

    pub fn is_animated(&self) -> bool {
        self.bar.is_some()
    }

    /// Removes the spinner line.
    pub fn finish(self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

impl Drop for AnalyzingSpinner {
    fn drop(&mut self) {
        if let Some(bar) = &self.bar {
            if !bar.is_finished() {
                bar.finish_and_clear();
            }
        }
    }
}
