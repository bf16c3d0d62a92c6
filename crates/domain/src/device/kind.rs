//! Device kind — the closed set of device types the dashboard knows about.

use serde::{Deserialize, Serialize};

/// The type of a device, which decides what states it may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Light,
    Lock,
    Thermostat,
    Fan,
}

impl DeviceKind {
    /// Whether the device flips between two labels on `toggle`.
    #[must_use]
    pub fn is_toggleable(self) -> bool {
        matches!(self, Self::Light | Self::Lock)
    }

    /// Whether the device holds a numeric reading.
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Thermostat | Self::Fan)
    }
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Lock => f.write_str("lock"),
            Self::Thermostat => f.write_str("thermostat"),
            Self::Fan => f.write_str("fan"),
        }
    }
}
