//! HTTP statistics server.
//!
//! The server responds to `GET` requests only:
//!
//! Path | Response
//! ---|---
//! `/stats.json` | The [`TrackerStats`](torrust_tracker_primitives::tracker_stats::TrackerStats) as JSON.
//! `/stats` | JSON if the request has the `Accept: application/json` header, HTML otherwise.
//! `/health_check` | `{"status":"Ok","torrents":1}`
//!
//! The HTML page exposes each counter in an element whose id is the name of the
//! counter in the JSON document:
//!
//! ```html
//! <span id="peersAll">1</span>
//! ```
//!
//! Refer to the [`v1`] module for the handlers and the responses.
pub mod server;
pub mod v1;

pub const HTTP_STATS_LOG_TARGET: &str = "HTTP STATS";

/// The version of the HTTP statistics server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    /// The `v1` version of the HTTP statistics server.
    V1,
}
