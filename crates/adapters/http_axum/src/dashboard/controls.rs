//! Form handlers behind the overview controls (PRG).
//!
//! Outcomes are deliberately not reported back: an unknown id or an
//! unsupported operation simply redirects to the overview unchanged.

use axum::extract::{Form, Path, State};
use axum::response::Redirect;
use serde::Deserialize;

use homedeck_domain::id::DeviceId;

use crate::state::AppState;

/// Form data posted by a slider.
#[derive(Deserialize)]
pub struct ValueForm {
    pub value: f64,
}

/// `POST /devices/:id/toggle` — flip a light or lock, back to `/`.
pub async fn toggle(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    let _ = state.registry.toggle_device(&DeviceId::from(id));
    Redirect::to("/")
}

/// `POST /devices/:id/value` — set a thermostat or fan, back to `/`.
pub async fn set_value(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ValueForm>,
) -> Redirect {
    let _ = state
        .registry
        .set_device_value(&DeviceId::from(id), form.value);
    Redirect::to("/")
}
