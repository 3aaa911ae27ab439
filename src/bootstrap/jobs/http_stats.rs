//! HTTP statistics server job starter.
//!
//! The function [`http_stats::start_job`](crate::bootstrap::jobs::http_stats::start_job) starts a new HTTP statistics server.
//!
//! Refer to the [configuration documentation](https://docs.rs/torrust-tracker-configuration) for the configuration options.
//!
//! The [`http_stats::start_job`](crate::bootstrap::jobs::http_stats::start_job) function spawns a new asynchronous task,
//! that tasks is the "**launcher**". The "**launcher**" starts the actual server and sends a message back to the main application.
//!
//! The "**launcher**" is an intermediary thread that decouples the HTTP server from the process that handles it.
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::task::JoinHandle;
use torrust_tracker_configuration::HttpStats;
use tracing::info;

use crate::core;
use crate::servers::http::server::{HttpServer, Launcher};
use crate::servers::http::{Version, HTTP_STATS_LOG_TARGET};

/// It starts a new HTTP statistics server with the provided configuration and version.
///
/// Returns `None` when the server is disabled in the configuration.
///
/// # Panics
///
/// It would panic if the server can not be started, for example, when the
/// bind address is already in use.
pub async fn start_job(config: &HttpStats, tracker: Arc<core::Tracker>, version: Version) -> Option<JoinHandle<()>> {
    if config.enabled {
        match version {
            Version::V1 => Some(start_v1(config.bind_address, tracker).await),
        }
    } else {
        info!(target: HTTP_STATS_LOG_TARGET, "Note: Not loading Http Stats Service, Not Enabled in Configuration.");
        None
    }
}

async fn start_v1(socket: SocketAddr, tracker: Arc<core::Tracker>) -> JoinHandle<()> {
    let server = HttpServer::new(Launcher::new(socket))
        .start(tracker)
        .await
        .expect("it should be able to start to the http stats server");

    tokio::spawn(async move {
        assert!(
            !server.state.halt_task.is_closed(),
            "Halt channel for HTTP stats server should be open"
        );
        server
            .state
            .task
            .await
            .expect("it should be able to join to the http stats server task");
    })
}
