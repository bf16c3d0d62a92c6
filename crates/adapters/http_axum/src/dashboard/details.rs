//! Dashboard details page for a single device.

use askama::Template;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use homedeck_domain::id::DeviceId;

use super::glyph;
use crate::state::AppState;

/// Device detail page template.
#[derive(Template)]
#[template(path = "details.html")]
pub struct DetailsTemplate {
    name: String,
    glyph: &'static str,
    kind: String,
    state: String,
    description: String,
}

impl IntoResponse for DetailsTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Shown instead of the details when the id is unknown.
#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    id: String,
}

impl IntoResponse for NotFoundTemplate {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, Html(self.to_string())).into_response()
    }
}

/// `GET /details/:id` — device detail.
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.registry.get_device(&DeviceId::from(id.as_str())) {
        Ok(device) => DetailsTemplate {
            glyph: glyph(&device.icon),
            kind: device.kind.to_string().to_uppercase(),
            state: device.state.to_string(),
            name: device.name,
            description: device.description,
        }
        .into_response(),
        Err(err) => {
            tracing::debug!(error = %err, "details requested for unknown device");
            NotFoundTemplate { id }.into_response()
        }
    }
}
