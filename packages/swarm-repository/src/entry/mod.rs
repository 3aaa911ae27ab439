use std::fmt::Debug;
use std::sync::Arc;

use torrust_tracker_client_identifier::Client;
use torrust_tracker_primitives::swarm_metadata::SwarmMetadata;
use torrust_tracker_primitives::{peer, DurationSinceAppStart};

use self::peer_list::PeerList;

pub mod mutex_std;
pub mod peer_list;
pub mod single;

pub trait Entry {
    /// It returns a copy of the swarm counters.
    fn get_swarm_metadata(&self) -> SwarmMetadata;

    /// Returns True if the Peers is Empty
    fn peers_is_empty(&self) -> bool;

    /// Returns the number of Peers
    fn get_peers_len(&self) -> usize;

    /// Get all swarm peers, optionally limiting the result.
    fn get_peers(&self, limit: Option<usize>) -> Vec<Arc<peer::Peer>>;

    /// The client a peer of the swarm was identified as.
    fn get_peer_client(&self, peer_id: &peer::Id) -> Option<Arc<Client>>;

    /// It inserts the peer or replaces the record with the same peer ID.
    ///
    /// Returns true if the peer was not in the swarm.
    fn upsert_peer(&mut self, peer: &peer::Peer) -> bool;

    /// It removes the peer with the given ID. Returns true if it was in the swarm.
    fn remove_peer(&mut self, peer_id: &peer::Id) -> bool;

    /// It removes the peers that have not been updated since `current_cutoff`
    /// and returns how many were removed.
    fn remove_inactive_peers(&mut self, current_cutoff: DurationSinceAppStart) -> usize;
}

/// A swarm shared between threads.
///
/// Every method locks the swarm once, so the counters returned by a mutation
/// are the ones right after that mutation.
#[allow(clippy::module_name_repetitions)]
pub trait EntrySync {
    fn get_swarm_metadata(&self) -> SwarmMetadata;
    fn upsert_peer_and_get_stats(&self, peer: &peer::Peer) -> SwarmMetadata;
    fn remove_peer_and_get_stats(&self, peer_id: &peer::Id) -> SwarmMetadata;
    fn remove_inactive_peers(&self, current_cutoff: DurationSinceAppStart) -> usize;
}

/// A swarm: the peers announcing the same torrent.
///
/// The counters in `metadata` always describe the records in `peers`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Swarm {
    pub(crate) peers: PeerList,
    pub(crate) metadata: SwarmMetadata,
}
