//! Action log — an append-only, most-recent-first record of state changes.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::id::DeviceId;
use crate::time::{self, Timestamp};

/// One immutable record of something a user did to a device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub time: Timestamp,
    pub device: DeviceId,
    pub action: String,
    pub user: String,
}

impl LogEntry {
    /// Wall-clock time of the entry as `HH:MM:SS`.
    #[must_use]
    pub fn clock_time(&self) -> String {
        time::clock_time(&self.time)
    }
}

/// Unbounded log, newest entry first.
#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    entries: VecDeque<LogEntry>,
}

impl ActionLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an entry and return a reference to it.
    pub fn record(&mut self, entry: LogEntry) -> &LogEntry {
        self.entries.push_front(entry);
        &self.entries[0]
    }

    /// Most recent entry, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    /// Iterate entries from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The newest `limit` entries, newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().take(limit)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(device: &str, action: &str) -> LogEntry {
        LogEntry {
            time: time::now(),
            device: DeviceId::from(device),
            action: action.to_string(),
            user: "Amrit".to_string(),
        }
    }

    #[test]
    fn should_start_empty() {
        let log = ActionLog::new();
        assert!(log.is_empty());
        assert!(log.latest().is_none());
    }

    #[test]
    fn should_keep_newest_entry_first() {
        let mut log = ActionLog::new();
        log.record(entry("light1", "Set to ON"));
        log.record(entry("door1", "Set to UNLOCKED"));

        assert_eq!(log.len(), 2);
        let actions: Vec<&str> = log.iter().map(|e| e.action.as_str()).collect();
        assert_eq!(actions, ["Set to UNLOCKED", "Set to ON"]);
        assert_eq!(log.latest().unwrap().device, DeviceId::from("door1"));
    }

    #[test]
    fn should_return_only_newest_entries_when_limited() {
        let mut log = ActionLog::new();
        log.record(entry("light1", "Set to ON"));
        log.record(entry("light1", "Set to OFF"));
        log.record(entry("door1", "Set to UNLOCKED"));

        let actions: Vec<&str> = log.recent(2).map(|e| e.action.as_str()).collect();
        assert_eq!(actions, ["Set to UNLOCKED", "Set to OFF"]);
        assert_eq!(log.recent(10).count(), 3);
        assert_eq!(log.recent(0).count(), 0);
    }

    #[test]
    fn should_return_recorded_entry() {
        let mut log = ActionLog::new();
        let recorded = log.record(entry("fan1", "Set to 2"));
        assert_eq!(recorded.action, "Set to 2");
    }

    #[test]
    fn should_format_clock_time() {
        let mut e = entry("light1", "Turn ON");
        e.time = time::today_at(8, 13, 26).unwrap();
        assert_eq!(e.clock_time(), "08:13:26");
    }
}
