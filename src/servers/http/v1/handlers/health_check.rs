//! Liveness of the statistics server.
use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::core::Tracker;

/// It answers `Ok` with the number of swarms the tracker knows.
///
/// Reading the number of swarms does not lock any swarm.
#[allow(clippy::unused_async)]
pub async fn handler(State(tracker): State<Arc<Tracker>>) -> Json<Report> {
    Json(Report {
        status: Status::Ok,
        torrents: tracker.number_of_torrents() as u64,
    })
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Status {
    Ok,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Report {
    pub status: Status,
    /// Swarms known by the tracker.
    pub torrents: u64,
}
