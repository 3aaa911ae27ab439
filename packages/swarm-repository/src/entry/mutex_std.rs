use torrust_tracker_primitives::swarm_metadata::SwarmMetadata;
use torrust_tracker_primitives::{peer, DurationSinceAppStart};

use super::{Entry, EntrySync};
use crate::EntryMutexStd;

impl EntrySync for EntryMutexStd {
    fn get_swarm_metadata(&self) -> SwarmMetadata {
        self.lock().expect("it should get a lock").get_swarm_metadata()
    }

    fn upsert_peer_and_get_stats(&self, peer: &peer::Peer) -> SwarmMetadata {
        let mut swarm = self.lock().expect("it should lock the entry");
        swarm.upsert_peer(peer);
        swarm.get_swarm_metadata()
    }

    fn remove_peer_and_get_stats(&self, peer_id: &peer::Id) -> SwarmMetadata {
        let mut swarm = self.lock().expect("it should lock the entry");
        swarm.remove_peer(peer_id);
        swarm.get_swarm_metadata()
    }

    fn remove_inactive_peers(&self, current_cutoff: DurationSinceAppStart) -> usize {
        self.lock()
            .expect("it should lock the entry")
            .remove_inactive_peers(current_cutoff)
    }
}
