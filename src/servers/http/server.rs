//! Module to handle the HTTP server instances.
use std::net::SocketAddr;
use std::sync::Arc;

use axum_server::Handle;
use derive_more::Constructor;
use futures::future::BoxFuture;
use thiserror::Error;
use tokio::sync::oneshot::{Receiver, Sender};

use super::v1::routes::router;
use super::HTTP_STATS_LOG_TARGET;
use crate::core::Tracker;
use crate::servers::signals::{graceful_shutdown, Halted, Started};

/// Error that can occur when starting or stopping the HTTP server.
///
/// Some errors triggered while starting the server are:
///
/// - The socket can not be bound to the configured address.
/// - The spawned server cannot send its `SocketAddr` back to the main thread.
///
/// Some errors triggered while stopping the server are:
///
/// - The channel to send the shutdown signal to the server is closed.
/// - The task to shutdown the server on the spawned server failed to execute to
///   completion.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not bind to {bind_to}: {source}")]
    UnableToBind { bind_to: SocketAddr, source: std::io::Error },

    #[error("The HTTP server did not report its bound address")]
    UnableToStart,

    #[error("The halt channel of the HTTP server was closed")]
    HaltChannelClosed,

    #[error("The HTTP server task failed: {source}")]
    TaskFailed { source: tokio::task::JoinError },
}

#[derive(Constructor, Debug)]
pub struct Launcher {
    pub bind_to: SocketAddr,
}

impl Launcher {
    /// It binds the socket and returns the future running the server.
    ///
    /// The server stops gracefully when the halt message is received.
    fn start(
        &self,
        listener: std::net::TcpListener,
        tracker: Arc<Tracker>,
        tx_start: Sender<Started>,
        rx_halt: Receiver<Halted>,
    ) -> Result<BoxFuture<'static, ()>, Error> {
        let address = listener.local_addr().map_err(|source| Error::UnableToBind {
            bind_to: self.bind_to,
            source,
        })?;

        let handle = Handle::new();

        tokio::task::spawn(graceful_shutdown(
            handle.clone(),
            rx_halt,
            format!("Shutting down HTTP stats server on socket address: {address}"),
        ));

        tracing::info!(target: HTTP_STATS_LOG_TARGET, "Starting on: http://{address}");

        let app = router(tracker, address);

        let running = Box::pin(async move {
            axum_server::from_tcp(listener)
                .handle(handle)
                .serve(app.into_make_service_with_connect_info::<SocketAddr>())
                .await
                .expect("Axum server crashed.");
        });

        tracing::info!(target: HTTP_STATS_LOG_TARGET, "Started on: http://{address}");

        tx_start.send(Started { address }).map_err(|_| Error::UnableToStart)?;

        Ok(running)
    }

    /// It binds the configured address.
    fn bind(&self) -> Result<std::net::TcpListener, Error> {
        let listener = std::net::TcpListener::bind(self.bind_to).map_err(|source| Error::UnableToBind {
            bind_to: self.bind_to,
            source,
        })?;

        // The listener is driven by tokio.
        listener.set_nonblocking(true).map_err(|source| Error::UnableToBind {
            bind_to: self.bind_to,
            source,
        })?;

        Ok(listener)
    }
}

/// A HTTP server instance controller with no HTTP instance running.
#[allow(clippy::module_name_repetitions)]
pub type StoppedHttpServer = HttpServer<Stopped>;

/// A HTTP server instance controller with a running HTTP instance.
#[allow(clippy::module_name_repetitions)]
pub type RunningHttpServer = HttpServer<Running>;

/// A HTTP server instance controller.
///
/// It's responsible for:
///
/// - Keeping the initial configuration of the server.
/// - Starting and stopping the server.
/// - Keeping the state of the server: `running` or `stopped`.
///
/// It's an state machine. Configurations cannot be changed. This struct
/// represents concrete configuration and state. It allows to start and stop the
/// server but always keeping the same configuration.
#[allow(clippy::module_name_repetitions)]
pub struct HttpServer<S> {
    /// The state of the server: `running` or `stopped`.
    pub state: S,
}

/// A stopped HTTP server state.
pub struct Stopped {
    launcher: Launcher,
}

/// A running HTTP server state.
pub struct Running {
    /// The address where the server is bound.
    pub binding: SocketAddr,
    pub halt_task: tokio::sync::oneshot::Sender<Halted>,
    pub task: tokio::task::JoinHandle<Launcher>,
}

impl HttpServer<Stopped> {
    /// It creates a new `HttpServer` controller in `stopped` state.
    #[must_use]
    pub fn new(launcher: Launcher) -> Self {
        Self {
            state: Stopped { launcher },
        }
    }

    /// It starts the server and returns a `HttpServer` controller in `running`
    /// state.
    ///
    /// # Errors
    ///
    /// It would return an error if the address can not be bound or no
    /// `SocketAddr` is returned after launching the server.
    pub async fn start(self, tracker: Arc<Tracker>) -> Result<HttpServer<Running>, Error> {
        let (tx_start, rx_start) = tokio::sync::oneshot::channel::<Started>();
        let (tx_halt, rx_halt) = tokio::sync::oneshot::channel::<Halted>();

        let launcher = self.state.launcher;

        let listener = launcher.bind()?;

        let task = tokio::spawn(async move {
            match launcher.start(listener, tracker, tx_start, rx_halt) {
                Ok(server) => server.await,
                Err(err) => tracing::error!(target: HTTP_STATS_LOG_TARGET, %err, "the server could not be started"),
            }

            launcher
        });

        let started = rx_start.await.map_err(|_| Error::UnableToStart)?;

        Ok(HttpServer {
            state: Running {
                binding: started.address,
                halt_task: tx_halt,
                task,
            },
        })
    }
}

impl HttpServer<Running> {
    /// It stops the server and returns a `HttpServer` controller in `stopped`
    /// state.
    ///
    /// # Errors
    ///
    /// It would return an error if the channel for the task killer signal was closed.
    pub async fn stop(self) -> Result<HttpServer<Stopped>, Error> {
        self.state
            .halt_task
            .send(Halted::Normal)
            .map_err(|_| Error::HaltChannelClosed)?;

        let launcher = self.state.task.await.map_err(|source| Error::TaskFailed { source })?;

        Ok(HttpServer {
            state: Stopped { launcher },
        })
    }
}
