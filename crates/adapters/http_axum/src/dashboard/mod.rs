//! Server-side rendered HTML dashboard (no JavaScript).
//!
//! - `GET  /`                    — overview: greeting, device cards, weather
//! - `GET  /stats`               — power chart and the action log
//! - `GET  /details/{id}`        — one device in full
//! - `POST /devices/{id}/toggle` — toggle form (PRG)
//! - `POST /devices/{id}/value`  — slider form (PRG)

pub mod controls;
pub mod details;
pub mod overview;
pub mod stats;

use axum::Router;
use axum::routing::{get, post};
use serde::Deserialize;

use homedeck_domain::device::{Device, DeviceKind, DeviceState, StateLabel};

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(overview::index))
        .route("/stats", get(stats::index))
        .route("/details/{id}", get(details::show))
        .route("/devices/{id}/toggle", post(controls::toggle))
        .route("/devices/{id}/value", post(controls::set_value))
}

/// Presentation-only settings; nothing here touches device state.
#[derive(Debug, Clone)]
pub struct DashboardSettings {
    /// Name shown under the greeting.
    pub resident_name: String,
    /// Auto-reload interval for the overview and statistics pages.
    pub refresh_seconds: u32,
    pub weather: WeatherSnapshot,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            resident_name: "Amrit Singh".to_string(),
            refresh_seconds: 10,
            weather: WeatherSnapshot::default(),
        }
    }
}

/// Static weather shown on the overview card.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WeatherSnapshot {
    pub location: String,
    pub temperature: i32,
    pub condition: String,
    pub high: i32,
    pub low: i32,
}

impl Default for WeatherSnapshot {
    fn default() -> Self {
        Self {
            location: "Kuopio, Finland".to_string(),
            temperature: -10,
            condition: "Partly Cloudy".to_string(),
            high: -2,
            low: -12,
        }
    }
}

/// Emoji stand-in for a device icon name.
pub(crate) fn glyph(icon: &str) -> &'static str {
    match icon {
        "lightbulb" | "lightbulb_outline" => "\u{1f4a1}",
        "door_front" => "\u{1f6aa}",
        "thermostat" => "\u{1f321}",
        "wind_power" => "\u{1f300}",
        "water_drop" => "\u{1f4a7}",
        _ => "\u{2022}",
    }
}

/// CSS modifier for the icon tint of a device in its current state.
pub(crate) fn tone(device: &Device) -> &'static str {
    match device.state {
        DeviceState::Label(StateLabel::On | StateLabel::Unlocked) => "on",
        DeviceState::Label(StateLabel::Off) => "off",
        DeviceState::Label(StateLabel::Locked) => "alert",
        DeviceState::Reading(_) => "idle",
    }
}

/// Short status line shown on a card.
pub(crate) fn status_text(device: &Device) -> String {
    match (device.kind, device.state) {
        (DeviceKind::Thermostat, DeviceState::Reading(value)) => {
            format!("{:.0}\u{b0}C", whole(value))
        }
        (_, DeviceState::Reading(value)) => format!("{:.0}", whole(value)),
        (_, DeviceState::Label(label)) => label.to_string(),
    }
}

/// Truncate toward zero; adding `0.0` folds `-0.0` into `0.0`.
fn whole(value: f64) -> f64 {
    value.trunc() + 0.0
}
