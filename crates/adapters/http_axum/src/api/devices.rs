//! JSON REST handlers for devices.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use homedeck_domain::device::Device;
use homedeck_domain::id::DeviceId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for setting a numeric device value.
#[derive(Deserialize)]
pub struct SetValueRequest {
    pub value: f64,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Device>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from endpoints returning a single device.
pub enum DeviceResponse {
    Ok(Json<Device>),
}

impl IntoResponse for DeviceResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/devices`
pub async fn list(State(state): State<AppState>) -> ListResponse {
    ListResponse::Ok(Json(state.registry.list_devices()))
}

/// `GET /api/devices/:id`
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<DeviceResponse, ApiError> {
    let device = state.registry.get_device(&DeviceId::from(id))?;
    Ok(DeviceResponse::Ok(Json(device)))
}

/// `POST /api/devices/:id/toggle`
pub async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<DeviceResponse, ApiError> {
    let device = state.registry.toggle_device(&DeviceId::from(id))?;
    Ok(DeviceResponse::Ok(Json(device)))
}

/// `PUT /api/devices/:id/value`
pub async fn set_value(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SetValueRequest>,
) -> Result<DeviceResponse, ApiError> {
    let device = state
        .registry
        .set_device_value(&DeviceId::from(id), req.value)?;
    Ok(DeviceResponse::Ok(Json(device)))
}
