use torrust_tracker_primitives::info_hash::InfoHash;
use torrust_tracker_primitives::swarm_metadata::SwarmMetadata;
use torrust_tracker_primitives::{peer, DurationSinceAppStart};
use torrust_tracker_swarm_repository::repository::Repository as _;
use torrust_tracker_swarm_repository::{EntrySingle, TorrentsDashMapMutexStd, TorrentsSkipMapMutexStd};

#[derive(Debug)]
pub(crate) enum Repo {
    SkipMapMutexStd(TorrentsSkipMapMutexStd),
    DashMapMutexStd(TorrentsDashMapMutexStd),
}

impl Repo {
    pub(crate) fn get(&self, key: &InfoHash) -> Option<EntrySingle> {
        match self {
            Repo::SkipMapMutexStd(repo) => Some(repo.get(key)?.lock().unwrap().clone()),
            Repo::DashMapMutexStd(repo) => Some(repo.get(key)?.lock().unwrap().clone()),
        }
    }

    pub(crate) fn get_swarm_metadata(&self, info_hash: &InfoHash) -> Option<SwarmMetadata> {
        match self {
            Repo::SkipMapMutexStd(repo) => repo.get_swarm_metadata(info_hash),
            Repo::DashMapMutexStd(repo) => repo.get_swarm_metadata(info_hash),
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Repo::SkipMapMutexStd(repo) => repo.len(),
            Repo::DashMapMutexStd(repo) => repo.len(),
        }
    }

    pub(crate) fn upsert_peer(&self, info_hash: &InfoHash, peer: &peer::Peer) -> SwarmMetadata {
        match self {
            Repo::SkipMapMutexStd(repo) => repo.upsert_peer(info_hash, peer),
            Repo::DashMapMutexStd(repo) => repo.upsert_peer(info_hash, peer),
        }
    }

    pub(crate) fn remove_peer(&self, info_hash: &InfoHash, peer_id: &peer::Id) -> Option<SwarmMetadata> {
        match self {
            Repo::SkipMapMutexStd(repo) => repo.remove_peer(info_hash, peer_id),
            Repo::DashMapMutexStd(repo) => repo.remove_peer(info_hash, peer_id),
        }
    }

    pub(crate) fn remove_inactive_peers(&self, current_cutoff: DurationSinceAppStart) -> usize {
        match self {
            Repo::SkipMapMutexStd(repo) => repo.remove_inactive_peers(current_cutoff),
            Repo::DashMapMutexStd(repo) => repo.remove_inactive_peers(current_cutoff),
        }
    }

    pub(crate) fn snapshot_for_stats(&self) -> Vec<SwarmMetadata> {
        match self {
            Repo::SkipMapMutexStd(repo) => repo.snapshot_for_stats(),
            Repo::DashMapMutexStd(repo) => repo.snapshot_for_stats(),
        }
    }
}
