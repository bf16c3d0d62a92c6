//! Time and timestamp helpers.
//!
//! Timestamps are stored in UTC; anything shown to a person is rendered in
//! the server's local time zone.

use chrono::{DateTime, Local, NaiveTime, SubsecRound, Utc};

/// UTC timestamp used for action log entries.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time, truncated to whole seconds.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now().trunc_subsecs(0)
}

/// Today's local date at the given local wall-clock time.
///
/// Returns `None` when the components do not form a valid time of day, or
/// the time does not exist locally (skipped by a DST change).
#[must_use]
pub fn today_at(hour: u32, minute: u32, second: u32) -> Option<Timestamp> {
    let time = NaiveTime::from_hms_opt(hour, minute, second)?;
    let local = Local::now()
        .date_naive()
        .and_time(time)
        .and_local_timezone(Local)
        .earliest()?;
    Some(local.with_timezone(&Utc))
}

/// Format a timestamp as local `HH:MM:SS`.
#[must_use]
pub fn clock_time(ts: &Timestamp) -> String {
    ts.with_timezone(&Local).format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn should_return_current_utc_time_without_subseconds() {
        let before = Utc::now().trunc_subsecs(0);
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
        assert_eq!(ts.nanosecond(), 0);
    }

    #[test]
    fn should_build_timestamp_for_today() {
        let ts = today_at(8, 12, 32).unwrap();
        assert_eq!(ts.with_timezone(&Local).date_naive(), Local::now().date_naive());
        assert_eq!(clock_time(&ts), "08:12:32");
    }

    #[test]
    fn should_show_log_time_as_local_wall_clock() {
        let local = Local::now().trunc_subsecs(0);
        let ts = local.with_timezone(&Utc);
        assert_eq!(clock_time(&ts), local.format("%H:%M:%S").to_string());
    }

    #[test]
    fn should_reject_invalid_time_of_day() {
        assert!(today_at(25, 0, 0).is_none());
    }
}
