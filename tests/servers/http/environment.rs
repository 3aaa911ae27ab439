use std::sync::Arc;

use torrust_tracker_configuration::{Configuration, HttpStats};
use torrust_tracker_primitives::info_hash::InfoHash;
use torrust_tracker_primitives::peer;
use torrust_tracker_primitives::swarm_metadata::SwarmMetadata;
use torrust_tracker_swarm_stats::bootstrap::app::initialize_with_configuration;
use torrust_tracker_swarm_stats::core::Tracker;
use torrust_tracker_swarm_stats::servers::http::server::{HttpServer, Launcher, Running, Stopped};

pub struct Environment<S> {
    pub config: Arc<HttpStats>,
    pub tracker: Arc<Tracker>,
    pub server: HttpServer<S>,
}

impl<S> Environment<S> {
    /// Announces a peer to the tracker.
    pub fn announce(&self, info_hash: &InfoHash, peer: &peer::Peer) -> SwarmMetadata {
        let mut peer = *peer;
        self.tracker.announce(info_hash, &mut peer)
    }
}

impl Environment<Stopped> {
    #[allow(dead_code)]
    pub fn new(configuration: &Arc<Configuration>) -> Self {
        let tracker = initialize_with_configuration(configuration);

        let config = Arc::new(configuration.http_stats.clone());

        let server = HttpServer::new(Launcher::new(config.bind_address));

        Self { config, tracker, server }
    }

    #[allow(dead_code)]
    pub async fn start(self) -> Environment<Running> {
        Environment {
            config: self.config,
            tracker: self.tracker.clone(),
            server: self.server.start(self.tracker).await.unwrap(),
        }
    }
}

impl Environment<Running> {
    pub async fn new(configuration: &Arc<Configuration>) -> Self {
        Environment::<Stopped>::new(configuration).start().await
    }

    pub async fn stop(self) -> Environment<Stopped> {
        Environment {
            config: self.config,
            tracker: self.tracker,
            server: self.server.stop().await.unwrap(),
        }
    }

    pub fn bind_address(&self) -> &std::net::SocketAddr {
        &self.server.state.binding
    }
}
