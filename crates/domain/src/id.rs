//! Typed identifier newtypes.
//!
//! Devices are keyed by short human-chosen strings (`light1`, `door1`, …)
//! rather than generated ids, since the set is fixed at startup.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`Device`](crate::device::Device).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    /// Wrap a string key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Access the inner key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the key is empty (never valid for a registered device).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeviceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DeviceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for DeviceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for DeviceId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_inner_key() {
        let id = DeviceId::from("light1");
        assert_eq!(id.to_string(), "light1");
        assert_eq!(id.as_str(), "light1");
    }

    #[test]
    fn should_compare_equal_when_keys_match() {
        assert_eq!(DeviceId::from("door1"), DeviceId::new(String::from("door1")));
        assert_ne!(DeviceId::from("door1"), DeviceId::from("door2"));
    }

    #[test]
    fn should_report_empty_key() {
        assert!(DeviceId::from("").is_empty());
        assert!(!DeviceId::from("fan1").is_empty());
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let id = DeviceId::from("thermostat1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"thermostat1\"");
        let parsed: DeviceId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
