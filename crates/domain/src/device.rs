//! Device — a simulated controllable thing shown as a card on the dashboard.

mod kind;
mod state;

pub use kind::DeviceKind;
pub use state::{DeviceState, StateLabel};

use serde::{Deserialize, Serialize};

use crate::error::{HomeDeckError, UnsupportedError, ValidationError};
use crate::id::DeviceId;

/// A simulated device and its current state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub kind: DeviceKind,
    pub state: DeviceState,
    pub description: String,
    /// Name of the icon the dashboard renders for this device.
    pub icon: String,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDeckError::Validation`] when the id or name is empty,
    /// or when the state does not fit the device kind.
    pub fn validate(&self) -> Result<(), HomeDeckError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyDeviceId.into());
        }
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if !self.state.fits(self.kind) {
            return Err(ValidationError::StateMismatch {
                kind: self.kind,
                state: self.state,
            }
            .into());
        }
        Ok(())
    }

    /// Flip a light between ON/OFF or a lock between LOCKED/UNLOCKED.
    ///
    /// Returns the new label.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDeckError::Unsupported`] for thermostats and fans; the
    /// state is left untouched.
    pub fn toggle(&mut self) -> Result<StateLabel, HomeDeckError> {
        let label = match self.state {
            DeviceState::Label(label) if self.kind.is_toggleable() => label.flipped(),
            _ => {
                return Err(UnsupportedError {
                    operation: "toggle",
                    kind: self.kind,
                }
                .into());
            }
        };
        self.state = DeviceState::Label(label);
        Ok(label)
    }

    /// Overwrite the numeric reading of a thermostat or fan.
    ///
    /// No range is enforced here; min/max belong to the control that
    /// produced the value.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDeckError::Validation`] when the device holds labels
    /// or `value` is not finite. The state is left untouched.
    pub fn set_value(&mut self, value: f64) -> Result<(), HomeDeckError> {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteValue(value).into());
        }
        let state = DeviceState::Reading(value);
        if !state.fits(self.kind) {
            return Err(ValidationError::StateMismatch {
                kind: self.kind,
                state,
            }
            .into());
        }
        self.state = state;
        Ok(())
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    id: Option<DeviceId>,
    name: Option<String>,
    kind: Option<DeviceKind>,
    state: Option<DeviceState>,
    description: Option<String>,
    icon: Option<String>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<DeviceId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: DeviceKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn state(mut self, state: impl Into<DeviceState>) -> Self {
        self.state = Some(state.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Consume the builder, validate, and return a [`Device`].
    ///
    /// Without an explicit state, lights start OFF, locks LOCKED and numeric
    /// devices at `0`. Without a kind, the device is a light.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDeckError::Validation`] if the id or name is missing,
    /// or the state does not fit the kind.
    pub fn build(self) -> Result<Device, HomeDeckError> {
        let kind = self.kind.unwrap_or(DeviceKind::Light);
        let state = self.state.unwrap_or(match kind {
            DeviceKind::Light => DeviceState::Label(StateLabel::Off),
            DeviceKind::Lock => DeviceState::Label(StateLabel::Locked),
            DeviceKind::Thermostat | DeviceKind::Fan => DeviceState::Reading(0.0),
        });
        let device = Device {
            id: self.id.unwrap_or_else(|| DeviceId::new("")),
            name: self.name.unwrap_or_default(),
            kind,
            state,
            description: self.description.unwrap_or_default(),
            icon: self.icon.unwrap_or_default(),
        };
        device.validate()?;
        Ok(device)
    }
}
