use std::sync::Arc;

use crossbeam_skiplist::SkipMap;
use torrust_tracker_primitives::info_hash::InfoHash;
use torrust_tracker_primitives::swarm_metadata::SwarmMetadata;
use torrust_tracker_primitives::{peer, DurationSinceAppStart};

use super::Repository;
use crate::entry::{Entry, EntrySync};
use crate::{EntryMutexStd, EntrySingle, SWARM_REPOSITORY_LOG_TARGET};

#[derive(Default, Debug)]
pub struct CrossbeamSkipList<T> {
    pub torrents: SkipMap<InfoHash, T>,
}

impl Repository<EntryMutexStd> for CrossbeamSkipList<EntryMutexStd>
where
    EntryMutexStd: EntrySync,
    EntrySingle: Entry,
{
    fn get(&self, key: &InfoHash) -> Option<EntryMutexStd> {
        let maybe_entry = self.torrents.get(key);
        maybe_entry.map(|entry| entry.value().clone())
    }

    fn get_swarm_metadata(&self, info_hash: &InfoHash) -> Option<SwarmMetadata> {
        self.torrents.get(info_hash).map(|entry| entry.value().get_swarm_metadata())
    }

    fn len(&self) -> usize {
        self.torrents.len()
    }

    fn upsert_peer(&self, info_hash: &InfoHash, peer: &peer::Peer) -> SwarmMetadata {
        // `get_or_insert` keeps the first swarm inserted when two threads race
        let entry = self.torrents.get_or_insert(*info_hash, Arc::default());
        entry.value().upsert_peer_and_get_stats(peer)
    }

    fn remove_peer(&self, info_hash: &InfoHash, peer_id: &peer::Id) -> Option<SwarmMetadata> {
        let entry = self.torrents.get(info_hash)?;

        Some(entry.value().remove_peer_and_get_stats(peer_id))
    }

    fn remove_inactive_peers(&self, current_cutoff: DurationSinceAppStart) -> usize {
        let mut removed = 0;

        for entry in &self.torrents {
            let removed_from_swarm = entry.value().remove_inactive_peers(current_cutoff);

            if removed_from_swarm > 0 {
                tracing::trace!(target: SWARM_REPOSITORY_LOG_TARGET, info_hash = %entry.key(), removed_from_swarm, "removed inactive peers");
            }

            removed += removed_from_swarm;
        }

        removed
    }

    fn snapshot_for_stats(&self) -> Vec<SwarmMetadata> {
        self.torrents.iter().map(|entry| entry.value().get_swarm_metadata()).collect()
    }
}
