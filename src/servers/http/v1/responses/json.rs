//! `JSON` response for the statistics.
use axum::response::{IntoResponse, Json, Response};
use torrust_tracker_primitives::tracker_stats::TrackerStats;

/// `200` response with the statistics in `JSON` format.
#[must_use]
pub fn stats(stats: &TrackerStats) -> Response {
    Json(stats).into_response()
}
