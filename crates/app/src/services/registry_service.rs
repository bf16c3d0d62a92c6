//! Registry service — use-cases for reading and controlling devices.

use std::sync::{Mutex, MutexGuard, PoisonError};

use homedeck_domain::action_log::LogEntry;
use homedeck_domain::device::Device;
use homedeck_domain::error::{HomeDeckError, NotFoundError};
use homedeck_domain::id::DeviceId;
use homedeck_domain::registry::DeviceRegistry;

/// Application service owning the device registry.
///
/// Each call holds the lock for exactly one registry operation and hands
/// back owned copies, so callers never observe a half-applied change.
pub struct RegistryService {
    registry: Mutex<DeviceRegistry>,
}

impl RegistryService {
    /// Create a new service that takes ownership of `registry`.
    #[must_use]
    pub fn new(registry: DeviceRegistry) -> Self {
        Self {
            registry: Mutex::new(registry),
        }
    }

    fn registry(&self) -> MutexGuard<'_, DeviceRegistry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All devices in display order.
    #[must_use]
    pub fn list_devices(&self) -> Vec<Device> {
        self.registry().devices().to_vec()
    }

    /// Look up a device by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDeckError::NotFound`] when no device with `id` exists.
    #[tracing::instrument(skip(self), fields(device_id = %id))]
    pub fn get_device(&self, id: &DeviceId) -> Result<Device, HomeDeckError> {
        self.registry().get(id).cloned().ok_or_else(|| {
            NotFoundError {
                entity: "Device",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Flip a light or lock.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDeckError::NotFound`] for an unknown id or
    /// [`HomeDeckError::Unsupported`] for numeric devices; nothing changes.
    #[tracing::instrument(skip(self), fields(device_id = %id))]
    pub fn toggle_device(&self, id: &DeviceId) -> Result<Device, HomeDeckError> {
        match self.registry().toggle(id) {
            Ok(device) => {
                tracing::info!(state = %device.state, "device toggled");
                Ok(device.clone())
            }
            Err(err) => {
                tracing::debug!(error = %err, "toggle ignored");
                Err(err)
            }
        }
    }

    /// Overwrite the reading of a thermostat or fan.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDeckError::NotFound`] for an unknown id or
    /// [`HomeDeckError::Validation`] when the device cannot hold `value`.
    #[tracing::instrument(skip(self), fields(device_id = %id))]
    pub fn set_device_value(&self, id: &DeviceId, value: f64) -> Result<Device, HomeDeckError> {
        match self.registry().set_value(id, value) {
            Ok(device) => {
                tracing::info!(state = %device.state, "device value set");
                Ok(device.clone())
            }
            Err(err) => {
                tracing::debug!(error = %err, "value change ignored");
                Err(err)
            }
        }
    }

    /// Record a free-text action against a device.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDeckError::NotFound`] when `id` is unknown.
    #[tracing::instrument(skip(self, action), fields(device_id = %id))]
    pub fn log_action(
        &self,
        id: &DeviceId,
        action: impl Into<String>,
    ) -> Result<LogEntry, HomeDeckError> {
        let mut registry = self.registry();
        let entry = registry.log(id, action)?.clone();
        tracing::info!(action = %entry.action, "action logged");
        Ok(entry)
    }

    /// Log entries, newest first, optionally capped at `limit`.
    #[must_use]
    pub fn recent_actions(&self, limit: Option<usize>) -> Vec<LogEntry> {
        let registry = self.registry();
        let history = registry.history();
        history
            .recent(limit.unwrap_or(history.len()))
            .cloned()
            .collect()
    }

    /// Identity recorded as the acting user.
    #[must_use]
    pub fn user(&self) -> String {
        self.registry().user().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homedeck_domain::catalog;
    use homedeck_domain::device::{DeviceState, StateLabel};
    use homedeck_domain::registry::LogPolicy;

    fn make_service() -> RegistryService {
        make_service_with(LogPolicy::default())
    }

    fn make_service_with(policy: LogPolicy) -> RegistryService {
        let registry = DeviceRegistry::builder()
            .devices(catalog::default_devices().unwrap())
            .user("Amrit")
            .policy(policy)
            .build()
            .unwrap();
        RegistryService::new(registry)
    }

    #[test]
    fn should_list_catalog_devices() {
        let svc = make_service();
        assert_eq!(svc.list_devices().len(), 6);
    }

    #[test]
    fn should_return_not_found_when_device_missing() {
        let svc = make_service();
        let result = svc.get_device(&DeviceId::from("garage"));
        assert!(matches!(result, Err(HomeDeckError::NotFound(_))));
    }

    #[test]
    fn should_toggle_light_and_record_action() {
        let svc = make_service();
        let device = svc.toggle_device(&DeviceId::from("light1")).unwrap();
        assert_eq!(device.state, DeviceState::Label(StateLabel::On));

        let recent = svc.recent_actions(Some(1));
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].action, "Set to ON");
        assert_eq!(recent[0].user, "Amrit");
    }

    #[test]
    fn should_persist_toggle_across_calls() {
        let svc = make_service();
        svc.toggle_device(&DeviceId::from("door1")).unwrap();
        let device = svc.get_device(&DeviceId::from("door1")).unwrap();
        assert_eq!(device.state, DeviceState::Label(StateLabel::Unlocked));
    }

    #[test]
    fn should_set_value_without_logging_by_default() {
        let svc = make_service();
        let device = svc
            .set_device_value(&DeviceId::from("thermostat1"), 25.0)
            .unwrap();
        assert_eq!(device.state, DeviceState::Reading(25.0));
        assert!(svc.recent_actions(None).is_empty());
    }

    #[test]
    fn should_log_value_change_when_enabled() {
        let svc = make_service_with(LogPolicy {
            toggles: true,
            value_changes: true,
        });
        svc.set_device_value(&DeviceId::from("fan1"), 2.0).unwrap();
        assert_eq!(svc.recent_actions(None)[0].action, "Set to 2.0");
    }

    #[test]
    fn should_return_error_without_side_effects_for_unknown_device() {
        let svc = make_service();
        let before = svc.list_devices();

        assert!(svc.toggle_device(&DeviceId::from("garage")).is_err());
        assert!(svc.set_device_value(&DeviceId::from("garage"), 1.0).is_err());
        assert!(svc.log_action(&DeviceId::from("garage"), "Opened").is_err());

        assert_eq!(svc.list_devices(), before);
        assert!(svc.recent_actions(None).is_empty());
    }

    #[test]
    fn should_log_free_text_action() {
        let svc = make_service();
        let entry = svc
            .log_action(&DeviceId::from("humidifier"), "Refilled")
            .unwrap();
        assert_eq!(entry.device, DeviceId::from("humidifier"));
        assert_eq!(svc.recent_actions(None)[0].action, "Refilled");
    }

    #[test]
    fn should_cap_recent_actions_at_limit() {
        let svc = make_service();
        for _ in 0..5 {
            svc.toggle_device(&DeviceId::from("light2")).unwrap();
        }
        assert_eq!(svc.recent_actions(Some(3)).len(), 3);
        assert_eq!(svc.recent_actions(None).len(), 5);
    }

    #[test]
    fn should_expose_user() {
        assert_eq!(make_service().user(), "Amrit");
    }
}
