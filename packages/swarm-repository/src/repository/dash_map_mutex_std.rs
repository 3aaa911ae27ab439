use dashmap::DashMap;
use torrust_tracker_primitives::info_hash::InfoHash;
use torrust_tracker_primitives::swarm_metadata::SwarmMetadata;
use torrust_tracker_primitives::{peer, DurationSinceAppStart};

use super::Repository;
use crate::entry::{Entry, EntrySync};
use crate::{EntryMutexStd, EntrySingle, SWARM_REPOSITORY_LOG_TARGET};

#[derive(Default, Debug)]
pub struct XacrimonDashMap<T> {
    pub torrents: DashMap<InfoHash, T>,
}

impl XacrimonDashMap<EntryMutexStd> {
    /// A clone of the swarm handle, so the shard lock is released before the
    /// swarm is locked.
    fn get_or_insert(&self, info_hash: &InfoHash) -> EntryMutexStd {
        if let Some(entry) = self.torrents.get(info_hash) {
            return entry.value().clone();
        }

        self.torrents.entry(*info_hash).or_default().value().clone()
    }
}

impl Repository<EntryMutexStd> for XacrimonDashMap<EntryMutexStd>
where
    EntryMutexStd: EntrySync,
    EntrySingle: Entry,
{
    fn get(&self, key: &InfoHash) -> Option<EntryMutexStd> {
        let maybe_entry = self.torrents.get(key);
        maybe_entry.map(|entry| entry.clone())
    }

    fn get_swarm_metadata(&self, info_hash: &InfoHash) -> Option<SwarmMetadata> {
        let swarm = self.get(info_hash)?;
        Some(swarm.get_swarm_metadata())
    }

    fn len(&self) -> usize {
        self.torrents.len()
    }

    fn upsert_peer(&self, info_hash: &InfoHash, peer: &peer::Peer) -> SwarmMetadata {
        self.get_or_insert(info_hash).upsert_peer_and_get_stats(peer)
    }

    fn remove_peer(&self, info_hash: &InfoHash, peer_id: &peer::Id) -> Option<SwarmMetadata> {
        let swarm = self.get(info_hash)?;

        Some(swarm.remove_peer_and_get_stats(peer_id))
    }

    fn remove_inactive_peers(&self, current_cutoff: DurationSinceAppStart) -> usize {
        let swarms: Vec<(InfoHash, EntryMutexStd)> = self
            .torrents
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();

        let mut removed = 0;

        for (info_hash, swarm) in swarms {
            let removed_from_swarm = swarm.remove_inactive_peers(current_cutoff);

            if removed_from_swarm > 0 {
                tracing::trace!(target: SWARM_REPOSITORY_LOG_TARGET, %info_hash, removed_from_swarm, "removed inactive peers");
            }

            removed += removed_from_swarm;
        }

        removed
    }

    fn snapshot_for_stats(&self) -> Vec<SwarmMetadata> {
        let swarms: Vec<EntryMutexStd> = self.torrents.iter().map(|entry| entry.value().clone()).collect();

        swarms.iter().map(EntrySync::get_swarm_metadata).collect()
    }
}
