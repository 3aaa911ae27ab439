//! Statistics services.
//!
//! It includes the [`get_stats`] service to get the aggregate
//! [`TrackerStats`] over every swarm.
//!
//! The statistics are not collected from events: every swarm keeps its own
//! counters up to date while peers join, change and leave, so the service only
//! adds up the counters of each swarm.
use std::sync::Arc;

use torrust_tracker_primitives::tracker_stats::TrackerStats;

use crate::core::Tracker;

/// It returns the [`TrackerStats`] over every swarm known by the tracker.
#[must_use]
pub fn get_stats(tracker: &Arc<Tracker>) -> TrackerStats {
    let stats = tracker.get_stats();

    tracing::debug!(torrents = stats.torrents, peers = stats.peers_all, "swarm statistics aggregated");

    stats
}
