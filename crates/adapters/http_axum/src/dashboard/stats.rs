//! Dashboard statistics page — power chart and recent activity.

use std::fmt::Write;

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use crate::state::AppState;

/// Demo power-consumption samples as `(x, y)` pairs.
const POWER_SERIES: [(f64, f64); 6] = [
    (0.0, 3.0),
    (2.0, 5.0),
    (4.0, 4.0),
    (6.0, 2.0),
    (8.0, 6.0),
    (10.0, 5.0),
];
const MAX_X: f64 = 10.0;
const MAX_Y: f64 = 8.0;

/// Statistics page template.
#[derive(Template)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    refresh_seconds: u32,
    chart: PowerChart,
    rows: Vec<LogRow>,
}

impl IntoResponse for StatsTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// One row of the activity table.
pub struct LogRow {
    pub time: String,
    pub device: String,
    pub action: String,
}

/// Inline SVG line chart, pre-scaled to its view box.
pub struct PowerChart {
    pub width: u32,
    pub height: u32,
    /// `points` attribute of the line.
    pub line: String,
    /// `points` attribute of the filled area under the line.
    pub area: String,
}

impl PowerChart {
    fn new(width: u32, height: u32) -> Self {
        let (w, h) = (f64::from(width), f64::from(height));
        let mut line = String::new();
        for (x, y) in POWER_SERIES {
            if !line.is_empty() {
                line.push(' ');
            }
            let _ = write!(line, "{:.1},{:.1}", x / MAX_X * w, h - y / MAX_Y * h);
        }
        let area = format!("0.0,{h:.1} {line} {w:.1},{h:.1}");
        Self {
            width,
            height,
            line,
            area,
        }
    }
}

/// `GET /stats` — power chart and the full action log.
pub async fn index(State(state): State<AppState>) -> StatsTemplate {
    let rows = state
        .registry
        .recent_actions(None)
        .into_iter()
        .map(|entry| LogRow {
            time: entry.clock_time(),
            device: entry.device.to_string(),
            action: entry.action,
        })
        .collect();

    StatsTemplate {
        refresh_seconds: state.dashboard.refresh_seconds,
        chart: PowerChart::new(600, 200),
        rows,
    }
}
