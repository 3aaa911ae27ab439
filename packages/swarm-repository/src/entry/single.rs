use std::sync::Arc;

use torrust_tracker_client_identifier::{identify, Client};
use torrust_tracker_primitives::swarm_metadata::SwarmMetadata;
use torrust_tracker_primitives::{peer, DurationSinceAppStart};

use super::peer_list::PeerRecord;
use super::Entry;
use crate::{EntrySingle, SWARM_REPOSITORY_LOG_TARGET};

impl Entry for EntrySingle {
    fn get_swarm_metadata(&self) -> SwarmMetadata {
        self.metadata.clone()
    }

    fn peers_is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    fn get_peers_len(&self) -> usize {
        self.peers.len()
    }

    fn get_peers(&self, limit: Option<usize>) -> Vec<Arc<peer::Peer>> {
        self.peers.get_peers(limit)
    }

    fn get_peer_client(&self, peer_id: &peer::Id) -> Option<Arc<Client>> {
        self.peers.get(peer_id).map(|record| record.client.clone())
    }

    fn upsert_peer(&mut self, peer: &peer::Peer) -> bool {
        if let Some(record) = self.peers.get_mut(&peer.peer_id) {
            let (is_seeder, ip_version, client) = record.classification();
            self.metadata.discount_peer(is_seeder, ip_version, client);

            record.peer = Arc::new(*peer);

            let (is_seeder, ip_version, client) = record.classification();
            self.metadata.count_peer(is_seeder, ip_version, client);

            return false;
        }

        let record = PeerRecord {
            peer: Arc::new(*peer),
            client: Arc::new(identify(&peer.peer_id)),
        };

        tracing::trace!(target: SWARM_REPOSITORY_LOG_TARGET, peer_id = %peer.peer_id, client = %record.client, "peer joined the swarm");

        let (is_seeder, ip_version, client) = record.classification();
        self.metadata.count_peer(is_seeder, ip_version, client);

        drop(self.peers.insert(peer.peer_id, record));

        true
    }

    fn remove_peer(&mut self, peer_id: &peer::Id) -> bool {
        match self.peers.remove(peer_id) {
            Some(record) => {
                let (is_seeder, ip_version, client) = record.classification();
                self.metadata.discount_peer(is_seeder, ip_version, client);
                true
            }
            None => false,
        }
    }

    fn remove_inactive_peers(&mut self, current_cutoff: DurationSinceAppStart) -> usize {
        let metadata = &mut self.metadata;
        let mut removed = 0;

        self.peers.retain(|_, record| {
            if record.peer.updated >= current_cutoff {
                return true;
            }

            let (is_seeder, ip_version, client) = record.classification();
            metadata.discount_peer(is_seeder, ip_version, client);
            removed += 1;

            false
        });

        removed
    }
}
