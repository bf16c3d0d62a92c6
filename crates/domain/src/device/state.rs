//! Device state — either a discrete label or a numeric reading.

use serde::{Deserialize, Serialize};

use super::DeviceKind;

/// Discrete state labels used by toggleable devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StateLabel {
    On,
    Off,
    Locked,
    Unlocked,
}

impl StateLabel {
    /// The opposite label within the same pair.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
            Self::Locked => Self::Unlocked,
            Self::Unlocked => Self::Locked,
        }
    }

    /// Whether a device of `kind` may hold this label.
    #[must_use]
    pub fn fits(self, kind: DeviceKind) -> bool {
        match kind {
            DeviceKind::Light => matches!(self, Self::On | Self::Off),
            DeviceKind::Lock => matches!(self, Self::Locked | Self::Unlocked),
            DeviceKind::Thermostat | DeviceKind::Fan => false,
        }
    }

    /// Upper-case label as shown to the user.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
            Self::Locked => "LOCKED",
            Self::Unlocked => "UNLOCKED",
        }
    }
}

impl std::fmt::Display for StateLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current state of a device.
///
/// Serialized untagged, so a label shows up as `"ON"` and a reading as `22.5`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeviceState {
    Label(StateLabel),
    Reading(f64),
}

impl DeviceState {
    /// Whether this state belongs to the value domain of `kind`.
    #[must_use]
    pub fn fits(&self, kind: DeviceKind) -> bool {
        match self {
            Self::Label(label) => label.fits(kind),
            Self::Reading(value) => kind.is_numeric() && value.is_finite(),
        }
    }

    /// The label, if this is a labelled state.
    #[must_use]
    pub fn label(&self) -> Option<StateLabel> {
        match self {
            Self::Label(label) => Some(*label),
            Self::Reading(_) => None,
        }
    }

    /// The reading, if this is a numeric state.
    #[must_use]
    pub fn reading(&self) -> Option<f64> {
        match self {
            Self::Label(_) => None,
            Self::Reading(value) => Some(*value),
        }
    }
}

impl From<StateLabel> for DeviceState {
    fn from(label: StateLabel) -> Self {
        Self::Label(label)
    }
}

impl From<f64> for DeviceState {
    fn from(value: f64) -> Self {
        Self::Reading(value)
    }
}

impl std::fmt::Display for DeviceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Label(label) => label.fmt(f),
            Self::Reading(value) if value.is_finite() && value.fract() == 0.0 => {
                write!(f, "{value:.1}")
            }
            Self::Reading(value) => value.fmt(f),
        }
    }
}
