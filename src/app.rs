//! Torrust swarm statistics application.
//!
//! The application has a global configuration for multiple jobs.
//! It's basically a container for other services.
//!
//! Optional jobs:
//!
//! - Torrent cleaner: it removes inactive peers.
//! - HTTP statistics server: it renders the swarm statistics as JSON or HTML.
use std::sync::Arc;

use tokio::task::JoinHandle;
use torrust_tracker_configuration::Configuration;

use crate::bootstrap::jobs::{http_stats, torrent_cleanup};
use crate::{core, servers};

/// It starts the jobs enabled in the configuration and returns their handles.
///
/// # Panics
///
/// Will panic if the HTTP statistics server can not be started.
pub async fn start(config: &Configuration, tracker: Arc<core::Tracker>) -> Vec<JoinHandle<()>> {
    let mut jobs: Vec<JoinHandle<()>> = Vec::new();

    // Start the HTTP statistics server
    if let Some(job) = http_stats::start_job(&config.http_stats, tracker.clone(), servers::http::Version::V1).await {
        jobs.push(job);
    }

    // Start runners to remove inactive peers, every interval
    if config.core.inactive_peer_cleanup_interval > 0 {
        jobs.push(torrent_cleanup::start_job(&config.core, &tracker));
    }

    jobs
}
