//! Default catalog — the demo household loaded at startup.

use crate::action_log::LogEntry;
use crate::device::{Device, DeviceKind, DeviceState, StateLabel};
use crate::error::HomeDeckError;
use crate::id::DeviceId;
use crate::time;

struct Entry {
    id: &'static str,
    name: &'static str,
    kind: DeviceKind,
    state: DeviceState,
    description: &'static str,
    icon: &'static str,
}

const DEVICES: [Entry; 6] = [
    Entry {
        id: "light1",
        name: "Living Room",
        kind: DeviceKind::Light,
        state: DeviceState::Label(StateLabel::Off),
        description: "Main light",
        icon: "lightbulb",
    },
    Entry {
        id: "door1",
        name: "Front Door",
        kind: DeviceKind::Lock,
        state: DeviceState::Label(StateLabel::Locked),
        description: "Security Lock",
        icon: "door_front",
    },
    Entry {
        id: "thermostat1",
        name: "Thermostat",
        kind: DeviceKind::Thermostat,
        state: DeviceState::Reading(22.0),
        description: "Climate Control",
        icon: "thermostat",
    },
    Entry {
        id: "fan1",
        name: "Ceiling Fan",
        kind: DeviceKind::Fan,
        state: DeviceState::Reading(0.0),
        description: "Ventilation",
        icon: "wind_power",
    },
    Entry {
        id: "light2",
        name: "Kitchen",
        kind: DeviceKind::Light,
        state: DeviceState::Label(StateLabel::On),
        description: "Spotlights",
        icon: "lightbulb_outline",
    },
    Entry {
        id: "humidifier",
        name: "Humidifier",
        kind: DeviceKind::Fan,
        state: DeviceState::Reading(1.0),
        description: "Air Quality",
        icon: "water_drop",
    },
];

/// Demo history for `light1`, oldest first: `(hour, minute, second, action)`.
const SEED_HISTORY: [(u32, u32, u32, &str); 3] = [
    (8, 12, 32, "Turn ON"),
    (8, 13, 23, "Turn OFF"),
    (8, 13, 26, "Turn ON"),
];

/// The fixed set of demo devices, in display order.
///
/// # Errors
///
/// Returns [`HomeDeckError::Validation`] if a catalog entry breaks a device
/// invariant.
pub fn default_devices() -> Result<Vec<Device>, HomeDeckError> {
    DEVICES
        .iter()
        .map(|entry| {
            Device::builder()
                .id(entry.id)
                .name(entry.name)
                .kind(entry.kind)
                .state(entry.state)
                .description(entry.description)
                .icon(entry.icon)
                .build()
        })
        .collect()
}

/// A few log entries from earlier today, oldest first, attributed to `user`.
#[must_use]
pub fn seed_history(user: &str) -> Vec<LogEntry> {
    SEED_HISTORY
        .iter()
        .filter_map(|&(hour, minute, second, action)| {
            Some(LogEntry {
                time: time::today_at(hour, minute, second)?,
                device: DeviceId::from("light1"),
                action: action.to_string(),
                user: user.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::DeviceRegistry;

    #[test]
    fn should_provide_six_valid_devices() {
        let devices = default_devices().unwrap();
        assert_eq!(devices.len(), 6);
        for device in &devices {
            assert!(device.validate().is_ok(), "{} is invalid", device.id);
        }
    }

    #[test]
    fn should_start_light1_off_and_door1_locked() {
        let devices = default_devices().unwrap();
        let light = devices.iter().find(|d| d.id.as_str() == "light1").unwrap();
        let door = devices.iter().find(|d| d.id.as_str() == "door1").unwrap();
        assert_eq!(light.state, DeviceState::Label(StateLabel::Off));
        assert_eq!(door.state, DeviceState::Label(StateLabel::Locked));
    }

    #[test]
    fn should_model_humidifier_as_fan() {
        let devices = default_devices().unwrap();
        let humidifier = devices
            .iter()
            .find(|d| d.id.as_str() == "humidifier")
            .unwrap();
        assert_eq!(humidifier.kind, DeviceKind::Fan);
        assert_eq!(humidifier.state, DeviceState::Reading(1.0));
    }

    #[test]
    fn should_seed_three_light1_entries() {
        let history = seed_history("Amrit");
        assert_eq!(history.len(), 3);
        assert!(history.iter().all(|e| e.device.as_str() == "light1"));
        assert!(history.iter().all(|e| e.user == "Amrit"));
        assert_eq!(history[0].clock_time(), "08:12:32");
    }

    #[test]
    fn should_build_registry_from_catalog() {
        let mut registry = DeviceRegistry::builder()
            .devices(default_devices().unwrap())
            .history(seed_history("Amrit"))
            .user("Amrit")
            .build()
            .unwrap();

        assert_eq!(registry.history().latest().unwrap().clock_time(), "08:13:26");

        registry.toggle(&DeviceId::from("light1")).unwrap();
        assert_eq!(registry.history().latest().unwrap().action, "Set to ON");
        assert_eq!(registry.history().len(), 4);
    }
}
