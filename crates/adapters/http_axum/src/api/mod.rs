//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod devices;
pub mod log;

use axum::Router;
use axum::routing::{get, post, put};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/devices", get(devices::list))
        .route("/devices/{id}", get(devices::get))
        .route("/devices/{id}/toggle", post(devices::toggle))
        .route("/devices/{id}/value", put(devices::set_value))
        .route("/log", get(log::list))
}
