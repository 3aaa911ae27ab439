//! Job that runs a task on intervals to clean up torrents.
//!
//! It removes inactive peers. **Inactive peers** are peers that have not been
//! updated for more than `max_peer_timeout` seconds. `max_peer_timeout` is a
//! customizable core tracker option.
//!
//! Swarms are never removed, so a torrent keeps counting in the statistics
//! after its last peer is removed.
//!
//! Refer to [`torrust-tracker-configuration documentation`](https://docs.rs/torrust-tracker-configuration) for more info about those options.

use std::sync::Arc;

use chrono::Utc;
use tokio::task::JoinHandle;
use torrust_tracker_configuration::Core;

use crate::core;

pub const CLEANUP_LOG_TARGET: &str = "CLEANUP";

/// It starts a jobs for cleaning up the torrent data in the tracker.
///
/// The cleaning task is executed on an `inactive_peer_cleanup_interval`.
///
/// Refer to [`torrust-tracker-configuration documentation`](https://docs.rs/torrust-tracker-configuration) for more info about that option.
#[must_use]
pub fn start_job(config: &Core, tracker: &Arc<core::Tracker>) -> JoinHandle<()> {
    let weak_tracker = std::sync::Arc::downgrade(tracker);
    let interval = config.inactive_peer_cleanup_interval;

    tokio::spawn(async move {
        let interval = std::time::Duration::from_secs(interval);
        let mut interval = tokio::time::interval(interval);
        interval.tick().await;

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!(target: CLEANUP_LOG_TARGET, "Stopping torrent cleanup job..");
                    break;
                }
                _ = interval.tick() => {
                    if let Some(tracker) = weak_tracker.upgrade() {
                        let start_time = Utc::now().time();
                        tracing::info!(target: CLEANUP_LOG_TARGET, "Cleaning up torrents..");
                        let removed_peers = tracker.cleanup_torrents();
                        tracing::info!(
                            target: CLEANUP_LOG_TARGET,
                            removed_peers,
                            "Cleaned up torrents in: {}ms",
                            (Utc::now().time() - start_time).num_milliseconds()
                        );
                    } else {
                        break;
                    }
                }
            }
        }
    })
}
