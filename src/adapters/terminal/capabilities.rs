//! Terminal implementation of the capability query.

use console::Term;

use crate::ports::{CapabilityQuery, DeviceClass, DeviceProfile};

/// Environment variable that asks for reduced motion when set to anything
/// other than an empty string or `0`.
pub const NO_MOTION_VAR: &str = "NO_MOTION";

/// Reads the terminal's size and interactivity, with optional overrides.
#[derive(Debug, Clone, Default)]
pub struct TerminalCapabilities {
    columns: Option<u16>,
    reduced_motion: Option<bool>,
}

impl TerminalCapabilities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this width instead of the measured one.
    pub fn with_columns(mut self, columns: Option<u16>) -> Self {
        self.columns = columns;
        self
    }

    /// Force reduced motion on or off instead of detecting it.
    pub fn with_reduced_motion(mut self, reduced_motion: Option<bool>) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    fn profile_for(&self, measured_columns: Option<u16>, is_tty: bool, no_motion: bool) -> DeviceProfile {
        let columns = self
            .columns
            .or(measured_columns)
            .unwrap_or(DeviceClass::DESKTOP_MIN_COLUMNS);

        DeviceProfile {
            device_class: DeviceClass::from_columns(columns),
            prefers_reduced_motion: self.reduced_motion.unwrap_or(no_motion || !is_tty),
            has_pointer: is_tty,
        }
    }
}

fn no_motion_requested() -> bool {
    std::env::var(NO_MOTION_VAR).is_ok_and(|v| !v.is_empty() && v != "0")
}

impl CapabilityQuery for TerminalCapabilities {
    fn device_profile(&self) -> DeviceProfile {
        let term = Term::stdout();
        let is_tty = term.is_term();
        let measured = term.size_checked().map(|(_rows, cols)| cols);

        let profile = self.profile_for(measured, is_tty, no_motion_requested());
        tracing::debug!(?profile, "Detected terminal capabilities");
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_picks_device_class() {
        let caps = TerminalCapabilities::new();
        assert_eq!(
            caps.profile_for(Some(60), true, false).device_class,
            DeviceClass::Mobile
        );
        assert_eq!(
            caps.profile_for(Some(100), true, false).device_class,
            DeviceClass::Tablet
        );
        assert_eq!(
            caps.profile_for(Some(160), true, false).device_class,
            DeviceClass::Desktop
        );
    }

    #[test]
    fn unknown_width_defaults_to_desktop() {
        let profile = TerminalCapabilities::new().profile_for(None, true, false);
        assert_eq!(profile.device_class, DeviceClass::Desktop);
    }

    #[test]
    fn column_override_beats_measurement() {
        let caps = TerminalCapabilities::new().with_columns(Some(70));
        assert_eq!(
            caps.profile_for(Some(200), true, false).device_class,
            DeviceClass::Mobile
        );
    }

    #[test]
    fn reduced_motion_from_env_or_non_tty() {
        let caps = TerminalCapabilities::new();
        assert!(caps.profile_for(Some(120), true, true).prefers_reduced_motion);
        assert!(caps.profile_for(Some(120), false, false).prefers_reduced_motion);
        assert!(!caps.profile_for(Some(120), true, false).prefers_reduced_motion);
    }

    #[test]
    fn reduced_motion_override_wins() {
        let caps = TerminalCapabilities::new().with_reduced_motion(Some(false));
        assert!(!caps.profile_for(Some(120), false, true).prefers_reduced_motion);
    }

    #[test]
    fn pointer_follows_interactivity() {
        let caps = TerminalCapabilities::new();
        assert!(caps.profile_for(None, true, false).has_pointer);
        assert!(!caps.profile_for(None, false, false).has_pointer);
    }
}
