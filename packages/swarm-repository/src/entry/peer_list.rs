use std::collections::BTreeMap;
use std::sync::Arc;

use torrust_tracker_client_identifier::Client;
use torrust_tracker_primitives::peer;

/// A peer in a swarm with the client it was identified as.
///
/// The client is identified once, when the peer joins the swarm, and shared
/// by all later versions of the record.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PeerRecord {
    pub peer: Arc<peer::Peer>,
    pub client: Arc<Client>,
}

impl PeerRecord {
    /// The values the swarm metadata counts this record with.
    pub(crate) fn classification(&self) -> (bool, torrust_tracker_primitives::IPVersion, (&str, &str)) {
        (self.peer.is_seeder(), self.peer.ip_version(), self.client.key())
    }
}

/// The peers of a swarm, unique by peer ID.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PeerList {
    peers: BTreeMap<peer::Id, PeerRecord>,
}

impl PeerList {
    pub(crate) fn len(&self) -> usize {
        self.peers.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    pub(crate) fn get(&self, key: &peer::Id) -> Option<&PeerRecord> {
        self.peers.get(key)
    }

    pub(crate) fn get_mut(&mut self, key: &peer::Id) -> Option<&mut PeerRecord> {
        self.peers.get_mut(key)
    }

    pub(crate) fn insert(&mut self, key: peer::Id, value: PeerRecord) -> Option<PeerRecord> {
        self.peers.insert(key, value)
    }

    pub(crate) fn remove(&mut self, key: &peer::Id) -> Option<PeerRecord> {
        self.peers.remove(key)
    }

    pub(crate) fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&peer::Id, &mut PeerRecord) -> bool,
    {
        self.peers.retain(f);
    }

    pub(crate) fn get_peers(&self, limit: Option<usize>) -> Vec<Arc<peer::Peer>> {
        let peers = self.peers.values().map(|record| record.peer.clone());

        match limit {
            Some(limit) => peers.take(limit).collect(),
            None => peers.collect(),
        }
    }
}
