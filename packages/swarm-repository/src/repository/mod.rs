use torrust_tracker_primitives::info_hash::InfoHash;
use torrust_tracker_primitives::swarm_metadata::SwarmMetadata;
use torrust_tracker_primitives::{peer, DurationSinceAppStart};

pub mod dash_map_mutex_std;
pub mod skip_map_mutex_std;

/// A concurrent map from torrent to swarm.
///
/// All operations can be called from any number of threads. Each one locks at
/// most one swarm at a time.
pub trait Repository<T>: Default + 'static {
    /// The swarm of the torrent, if it has ever been announced.
    fn get(&self, key: &InfoHash) -> Option<T>;

    /// The counters of one swarm, if it has ever been announced.
    fn get_swarm_metadata(&self, info_hash: &InfoHash) -> Option<SwarmMetadata>;

    /// Number of swarms, including the ones without peers.
    fn len(&self) -> usize;

    /// Whether no torrent has been announced yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// It creates the swarm if needed and inserts or replaces the peer record.
    ///
    /// Returns the counters of the swarm right after the change.
    fn upsert_peer(&self, info_hash: &InfoHash, peer: &peer::Peer) -> SwarmMetadata;

    /// It removes the peer from the swarm. The swarm itself is kept even if it
    /// ends up empty.
    ///
    /// Returns the counters of the swarm after the change, or `None` when the
    /// swarm does not exist.
    fn remove_peer(&self, info_hash: &InfoHash, peer_id: &peer::Id) -> Option<SwarmMetadata>;

    /// It removes, swarm by swarm, the peers not updated since `current_cutoff`.
    ///
    /// Returns the number of peers removed.
    fn remove_inactive_peers(&self, current_cutoff: DurationSinceAppStart) -> usize;

    /// A copy of the counters of every swarm.
    ///
    /// Each swarm is locked only while its counters are copied, so the copy of
    /// one swarm is always consistent while different swarms may be copied at
    /// slightly different times.
    fn snapshot_for_stats(&self) -> Vec<SwarmMetadata>;
}
