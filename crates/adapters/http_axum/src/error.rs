//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use homedeck_domain::error::HomeDeckError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`HomeDeckError`] to an HTTP response with appropriate status code.
pub struct ApiError(HomeDeckError);

impl From<HomeDeckError> for ApiError {
    fn from(err: HomeDeckError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            HomeDeckError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            HomeDeckError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            HomeDeckError::Unsupported(err) => (StatusCode::CONFLICT, err.to_string()),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
