//! Axum handlers for the `stats` requests.
//!
//! The statistics are rendered as JSON when the request is made to
//! `/stats.json` or when it accepts `application/json`, and as an HTML page
//! otherwise.
use std::sync::Arc;

use axum::extract::State;
use axum::http::header::ACCEPT;
use axum::http::HeaderMap;
use axum::response::Response;

use crate::core::services::statistics::get_stats;
use crate::core::Tracker;
use crate::servers::http::v1::responses;

/// It handles the `/stats` request.
#[allow(clippy::unused_async)]
pub async fn handle(State(tracker): State<Arc<Tracker>>, headers: HeaderMap) -> Response {
    let stats = get_stats(&tracker);

    if accepts_json(&headers) {
        responses::json::stats(&stats)
    } else {
        responses::html::stats(&stats)
    }
}

/// It handles the `/stats.json` request.
#[allow(clippy::unused_async)]
pub async fn handle_json(State(tracker): State<Arc<Tracker>>) -> Response {
    responses::json::stats(&get_stats(&tracker))
}

/// Whether one of the media ranges in the `Accept` headers is
/// `application/json`. Media type parameters are ignored.
fn accepts_json(headers: &HeaderMap) -> bool {
    headers
        .get_all(ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .any(|media_range| {
            let media_type = media_range.split(';').next().unwrap_or_default().trim();
            media_type.eq_ignore_ascii_case("application/json")
        })
}
