//! Capability Query Port - What the presentation surface can do.
//!
//! The answer only shapes rendering; it never influences the wizard.

use serde::{Deserialize, Serialize};

/// Coarse width class of the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl DeviceClass {
    /// Below this many columns the layout is treated as mobile.
    pub const TABLET_MIN_COLUMNS: u16 = 80;
    /// Below this many columns the layout is treated as tablet.
    pub const DESKTOP_MIN_COLUMNS: u16 = 120;

    pub fn from_columns(columns: u16) -> Self {
        if columns < Self::TABLET_MIN_COLUMNS {
            DeviceClass::Mobile
        } else if columns < Self::DESKTOP_MIN_COLUMNS {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn is_narrow(&self) -> bool {
        matches!(self, DeviceClass::Mobile)
    }
}

/// Snapshot of the display's capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeviceProfile {
    pub device_class: DeviceClass,
    pub prefers_reduced_motion: bool,
    pub has_pointer: bool,
}

/// Port for querying the presentation surface.
pub trait CapabilityQuery: Send + Sync {
    fn device_profile(&self) -> DeviceProfile;
}
