//! The swarm repository: which peers are announcing which torrents.
//!
//! The repository maps every [`InfoHash`](torrust_tracker_primitives::info_hash::InfoHash)
//! to its own swarm behind its own mutex ([`EntryMutexStd`]). Mutations only
//! lock the swarm they change, so announces for different torrents never wait
//! for each other, and the statistics are read one swarm at a time.
//!
//! Every swarm keeps a [`SwarmMetadata`](torrust_tracker_primitives::swarm_metadata::SwarmMetadata)
//! up to date while peers are inserted, updated and removed. Reading the
//! statistics of a swarm is a copy of its counters, not a walk over its peers.
//!
//! Two implementations of the [`Repository`](repository::Repository) trait are
//! provided. They only differ in the concurrent map holding the swarms:
//!
//! - [`TorrentsSkipMapMutexStd`]: lock-free `crossbeam` skip list.
//! - [`TorrentsDashMapMutexStd`]: sharded `dashmap`.
//!
//! Swarms are never removed. A swarm whose last peer left stays in the
//! repository and keeps counting as a known torrent.
use std::sync::Arc;

use repository::dash_map_mutex_std::XacrimonDashMap;
use repository::skip_map_mutex_std::CrossbeamSkipList;

pub mod entry;
pub mod repository;

pub const SWARM_REPOSITORY_LOG_TARGET: &str = "SWARM REPOSITORY";

// Swarm Entry

pub type EntrySingle = entry::Swarm;
pub type EntryMutexStd = Arc<std::sync::Mutex<EntrySingle>>;

// Repos

// Swarm repo: SkipMap; Peer list: BTreeMap
pub type TorrentsSkipMapMutexStd = CrossbeamSkipList<EntryMutexStd>;

// Swarm repo: DashMap; Peer list: BTreeMap
pub type TorrentsDashMapMutexStd = XacrimonDashMap<EntryMutexStd>;
