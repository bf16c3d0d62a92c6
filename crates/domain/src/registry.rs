//! Device registry — owns the fixed device set and the action log.
//!
//! The registry is constructed once at startup and handed to whoever drives
//! it. Devices are never added or removed afterwards; only their state
//! changes. Every operation addressed to an unknown device id leaves both the
//! devices and the log untouched and reports [`HomeDeckError::NotFound`],
//! which callers are free to ignore.

use serde::{Deserialize, Serialize};

use crate::action_log::{ActionLog, LogEntry};
use crate::device::{Device, DeviceState};
use crate::error::{HomeDeckError, NotFoundError, ValidationError};
use crate::id::DeviceId;
use crate::time;

/// Which operations append to the action log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogPolicy {
    /// Log `Set to <LABEL>` after each successful toggle.
    pub toggles: bool,
    /// Log `Set to <value>` after each successful value change.
    pub value_changes: bool,
}

impl Default for LogPolicy {
    fn default() -> Self {
        Self {
            toggles: true,
            value_changes: false,
        }
    }
}

/// In-memory registry of devices plus their action log.
#[derive(Debug, Clone)]
pub struct DeviceRegistry {
    devices: Vec<Device>,
    log: ActionLog,
    user: String,
    policy: LogPolicy,
}

impl DeviceRegistry {
    /// Create a builder for constructing a [`DeviceRegistry`].
    #[must_use]
    pub fn builder() -> DeviceRegistryBuilder {
        DeviceRegistryBuilder::default()
    }

    /// Look up a device by id.
    #[must_use]
    pub fn get(&self, id: &DeviceId) -> Option<&Device> {
        self.devices.iter().find(|device| &device.id == id)
    }

    /// All devices in startup order.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// The action log, newest entry first.
    #[must_use]
    pub fn history(&self) -> &ActionLog {
        &self.log
    }

    /// Identity recorded as the acting user in every log entry.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    #[must_use]
    pub fn policy(&self) -> LogPolicy {
        self.policy
    }

    /// Flip a light or lock and, per policy, log the resulting label.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDeckError::NotFound`] for an unknown id and
    /// [`HomeDeckError::Unsupported`] for numeric devices. Neither changes
    /// any state or log entry.
    pub fn toggle(&mut self, id: &DeviceId) -> Result<&Device, HomeDeckError> {
        let index = self.position(id)?;
        let label = self.devices[index].toggle()?;
        if self.policy.toggles {
            self.append(id.clone(), format!("Set to {label}"));
        }
        Ok(&self.devices[index])
    }

    /// Overwrite the reading of a thermostat or fan.
    ///
    /// Only logged when [`LogPolicy::value_changes`] is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDeckError::NotFound`] for an unknown id and
    /// [`HomeDeckError::Validation`] when the device holds labels or the
    /// value is not finite.
    pub fn set_value(&mut self, id: &DeviceId, value: f64) -> Result<&Device, HomeDeckError> {
        let index = self.position(id)?;
        self.devices[index].set_value(value)?;
        if self.policy.value_changes {
            let state = DeviceState::Reading(value);
            self.append(id.clone(), format!("Set to {state}"));
        }
        Ok(&self.devices[index])
    }

    /// Prepend a free-text entry for `id`, attributed to the registry user.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDeckError::NotFound`] when `id` is not a registered
    /// device; nothing is logged in that case.
    pub fn log(
        &mut self,
        id: &DeviceId,
        action: impl Into<String>,
    ) -> Result<&LogEntry, HomeDeckError> {
        self.position(id)?;
        Ok(self.append(id.clone(), action.into()))
    }

    fn append(&mut self, device: DeviceId, action: String) -> &LogEntry {
        self.log.record(LogEntry {
            time: time::now(),
            device,
            action,
            user: self.user.clone(),
        })
    }

    fn position(&self, id: &DeviceId) -> Result<usize, HomeDeckError> {
        self.devices
            .iter()
            .position(|device| &device.id == id)
            .ok_or_else(|| {
                NotFoundError {
                    entity: "Device",
                    id: id.to_string(),
                }
                .into()
            })
    }
}

/// Step-by-step builder for [`DeviceRegistry`].
#[derive(Debug, Default)]
pub struct DeviceRegistryBuilder {
    devices: Vec<Device>,
    history: Vec<LogEntry>,
    user: Option<String>,
    policy: LogPolicy,
}

impl DeviceRegistryBuilder {
    #[must_use]
    pub fn device(mut self, device: Device) -> Self {
        self.devices.push(device);
        self
    }

    #[must_use]
    pub fn devices(mut self, devices: impl IntoIterator<Item = Device>) -> Self {
        self.devices.extend(devices);
        self
    }

    /// Pre-existing log entries, given oldest first.
    #[must_use]
    pub fn history(mut self, entries: impl IntoIterator<Item = LogEntry>) -> Self {
        self.history.extend(entries);
        self
    }

    #[must_use]
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    #[must_use]
    pub fn policy(mut self, policy: LogPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Consume the builder, validate, and return a [`DeviceRegistry`].
    ///
    /// # Errors
    ///
    /// Returns [`HomeDeckError::Validation`] when the user is missing or
    /// empty, a device is invalid, or two devices share an id.
    pub fn build(self) -> Result<DeviceRegistry, HomeDeckError> {
        let user = self.user.unwrap_or_default();
        if user.is_empty() {
            return Err(ValidationError::EmptyUser.into());
        }

        for (index, device) in self.devices.iter().enumerate() {
            device.validate()?;
            if self.devices[..index].iter().any(|d| d.id == device.id) {
                return Err(ValidationError::DuplicateDevice(device.id.clone()).into());
            }
        }

        let mut log = ActionLog::new();
        for entry in self.history {
            log.record(entry);
        }

        Ok(DeviceRegistry {
            devices: self.devices,
            log,
            user,
            policy: self.policy,
        })
    }
}
