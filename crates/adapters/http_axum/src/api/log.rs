//! JSON REST handler for the action log.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use homedeck_domain::action_log::LogEntry;

use crate::state::AppState;

/// Query parameters for the log endpoint.
#[derive(Debug, Deserialize)]
pub struct LogQuery {
    /// Maximum number of entries, newest first.
    pub limit: Option<usize>,
}

/// `GET /api/log?limit=N`
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<LogQuery>,
) -> Json<Vec<LogEntry>> {
    Json(state.registry.recent_actions(query.limit))
}
