//! Dashboard overview page — greeting, device cards and the weather card.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use chrono::Timelike;

use homedeck_domain::device::{Device, DeviceKind, DeviceState, StateLabel};

use super::{WeatherSnapshot, glyph, status_text, tone};
use crate::state::AppState;

/// Devices on the "My Devices" grid, in display order. The humidifier is
/// only reachable through its details page.
const GRID_LAYOUT: [&str; 5] = ["light1", "door1", "light2", "thermostat1", "fan1"];

/// Overview page template.
#[derive(Template)]
#[template(path = "overview.html")]
pub struct OverviewTemplate {
    refresh_seconds: u32,
    greeting: &'static str,
    resident_name: String,
    cards: Vec<DeviceCard>,
    weather: WeatherSnapshot,
}

impl IntoResponse for OverviewTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// One device card on the overview grid.
pub struct DeviceCard {
    pub id: String,
    pub name: String,
    pub glyph: &'static str,
    pub tone: &'static str,
    pub status: String,
    pub control: Control,
}

/// The input rendered at the bottom of a card.
#[derive(Clone, Copy)]
pub enum Control {
    Toggle(ToggleControl),
    Slider(SliderControl),
}

/// A switch-style button for lights and locks.
#[derive(Clone, Copy)]
pub struct ToggleControl {
    pub active: bool,
    pub action: &'static str,
}

/// A range input for thermostats and fans.
#[derive(Clone, Copy)]
pub struct SliderControl {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: f64,
}

impl DeviceCard {
    fn from_device(device: &Device) -> Self {
        Self {
            id: device.id.to_string(),
            name: device.name.clone(),
            glyph: glyph(&device.icon),
            tone: tone(device),
            status: status_text(device),
            control: control_for(device),
        }
    }
}

fn control_for(device: &Device) -> Control {
    match device.state {
        DeviceState::Label(label) => Control::Toggle(ToggleControl {
            active: matches!(label, StateLabel::On | StateLabel::Unlocked),
            action: match label {
                StateLabel::On => "Turn off",
                StateLabel::Off => "Turn on",
                StateLabel::Locked => "Unlock",
                StateLabel::Unlocked => "Lock",
            },
        }),
        DeviceState::Reading(value) => {
            let (min, max) = match device.kind {
                DeviceKind::Thermostat => (16.0, 30.0),
                _ => (0.0, 3.0),
            };
            Control::Slider(SliderControl {
                min,
                max,
                step: 1.0,
                value,
            })
        }
    }
}

fn grid_cards(devices: &[Device]) -> Vec<DeviceCard> {
    GRID_LAYOUT
        .iter()
        .filter_map(|id| devices.iter().find(|d| d.id.as_str() == *id))
        .map(DeviceCard::from_device)
        .collect()
}

/// Time-of-day greeting for the given local hour.
#[must_use]
pub fn greeting(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good Morning",
        12..=16 => "Good Afternoon",
        _ => "Good Evening",
    }
}

/// `GET /` — device overview.
pub async fn index(State(state): State<AppState>) -> OverviewTemplate {
    let devices = state.registry.list_devices();
    let cards = grid_cards(&devices);

    OverviewTemplate {
        refresh_seconds: state.dashboard.refresh_seconds,
        greeting: greeting(chrono::Local::now().hour()),
        resident_name: state.dashboard.resident_name.clone(),
        cards,
        weather: state.dashboard.weather.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use homedeck_domain::catalog;
    use tower::ServiceExt;

    use crate::router::build;
    use crate::router::tests::{body_text, test_state};

    #[test]
    fn should_greet_by_time_of_day() {
        assert_eq!(greeting(4), "Good Evening");
        assert_eq!(greeting(5), "Good Morning");
        assert_eq!(greeting(11), "Good Morning");
        assert_eq!(greeting(12), "Good Afternoon");
        assert_eq!(greeting(16), "Good Afternoon");
        assert_eq!(greeting(17), "Good Evening");
        assert_eq!(greeting(23), "Good Evening");
    }

    #[test]
    fn should_give_thermostat_a_sixteen_to_thirty_slider() {
        let devices = catalog::default_devices().unwrap();
        let thermostat = devices
            .iter()
            .find(|d| d.kind == DeviceKind::Thermostat)
            .unwrap();
        let Control::Slider(slider) = control_for(thermostat) else {
            panic!("thermostat should render a slider");
        };
        assert!((slider.min - 16.0).abs() < f64::EPSILON);
        assert!((slider.max - 30.0).abs() < f64::EPSILON);
        assert!((slider.value - 22.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_offer_unlock_for_locked_door() {
        let devices = catalog::default_devices().unwrap();
        let door = devices.iter().find(|d| d.kind == DeviceKind::Lock).unwrap();
        let Control::Toggle(toggle) = control_for(door) else {
            panic!("lock should render a toggle");
        };
        assert!(!toggle.active);
        assert_eq!(toggle.action, "Unlock");
    }

    #[test]
    fn should_lay_out_grid_in_fixed_order_without_humidifier() {
        let devices = catalog::default_devices().unwrap();
        let ids: Vec<String> = grid_cards(&devices).into_iter().map(|c| c.id).collect();
        assert_eq!(ids, ["light1", "door1", "light2", "thermostat1", "fan1"]);
    }

    #[tokio::test]
    async fn should_render_grid_device_cards() {
        let response = build(test_state())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("My Devices"));
        assert!(body.contains("Amrit Singh"));
        for name in ["Living Room", "Front Door", "Thermostat", "Ceiling Fan", "Kitchen"] {
            assert!(body.contains(name), "missing card for {name}");
        }
        assert!(!body.contains("Humidifier"));
        let kitchen = body.find("Kitchen").unwrap();
        assert!(body.find("Front Door").unwrap() < kitchen);
        assert!(kitchen < body.find("Ceiling Fan").unwrap());
        assert!(body.contains("22\u{b0}C"));
        assert!(body.contains("/devices/light1/toggle"));
        assert!(body.contains("/devices/thermostat1/value"));
        assert!(body.contains("Kuopio, Finland"));
    }
}
