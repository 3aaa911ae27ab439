//! The core `tracker` module contains the generic `BitTorrent` tracker logic
//! which is independent of the delivery layer.
//!
//! The [`Tracker`] owns the swarm repository: one swarm per torrent, each one
//! with the peers announcing it and the counters describing them.
//!
//! ```text
//! Delivery layer     Domain layer
//!
//!   transport  |
//!   decoder ---|---> Tracker::announce -----> swarm repository
//!              |                                     ^
//!   HTTP stats |                                     |
//!   server ----|---> services::statistics ----> statistics::aggregate
//! ```
//!
//! # Announce
//!
//! An announce inserts the peer into the swarm of the torrent, or replaces the
//! record of a peer with the same ID. The swarm is created by the first
//! announce for the torrent. A peer announcing the `stopped` event is removed
//! from the swarm, but the swarm is kept even when it ends up empty.
//!
//! ```rust,no_run
//! use std::net::{IpAddr, Ipv4Addr, SocketAddr};
//!
//! use torrust_tracker_primitives::announce_event::AnnounceEvent;
//! use torrust_tracker_primitives::info_hash::InfoHash;
//! use torrust_tracker_primitives::{peer, DurationSinceAppStart};
//! use torrust_tracker_swarm_stats::core::Tracker;
//!
//! let tracker = Tracker::new(&torrust_tracker_configuration::Core::default());
//!
//! let info_hash = "3b245504cf5f11bbdbe1201cea6a6bf45aee1bc0".parse::<InfoHash>().unwrap();
//!
//! let mut peer = peer::Peer {
//!     peer_id: peer::Id(*b"-WW0091-4ea5886ce160"),
//!     peer_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::new(126, 0, 0, 1)), 6881),
//!     updated: DurationSinceAppStart::ZERO,
//!     left: Some(peer::NumberOfBytes(1024)),
//!     event: AnnounceEvent::Started,
//! };
//!
//! let swarm_metadata = tracker.announce(&info_hash, &mut peer);
//!
//! assert_eq!(swarm_metadata.leechers, 1);
//! ```
//!
//! # Cleanup
//!
//! Peers that stop announcing without sending the `stopped` event are removed
//! by [`Tracker::cleanup_torrents`] once they have been silent for more than
//! `max_peer_timeout` seconds. The [`torrent_cleanup`](crate::bootstrap::jobs::torrent_cleanup)
//! job calls it periodically.
pub mod services;
pub mod statistics;

use std::sync::Arc;
use std::time::Duration;

use torrust_tracker_clock::clock::Time;
use torrust_tracker_configuration::{Core, TrackerPolicy};
use torrust_tracker_primitives::info_hash::InfoHash;
use torrust_tracker_primitives::peer;
use torrust_tracker_primitives::swarm_metadata::SwarmMetadata;
use torrust_tracker_primitives::tracker_stats::TrackerStats;
use torrust_tracker_swarm_repository::repository::Repository as _;
use torrust_tracker_swarm_repository::TorrentsSkipMapMutexStd;

use crate::CurrentClock;

/// The swarm repository used by the tracker.
pub type Torrents = TorrentsSkipMapMutexStd;

/// The domain layer tracker service.
///
/// It's the entry point for the announces decoded by the transports and for
/// the statistics served by the delivery layer.
pub struct Tracker {
    policy: TrackerPolicy,
    torrents: Arc<Torrents>,
}

impl Tracker {
    /// `Tracker` constructor.
    #[must_use]
    pub fn new(config: &Core) -> Tracker {
        Tracker {
            policy: config.tracker_policy,
            torrents: Arc::default(),
        }
    }

    /// It handles an announce: the peer joins, updates or leaves the swarm of
    /// the torrent depending on its event.
    ///
    /// The time of the announce is set to the current time.
    ///
    /// Returns the counters of the swarm after the announce. A `stopped` peer
    /// announcing a torrent the tracker does not know gets an empty swarm, and
    /// the swarm is not created.
    pub fn announce(&self, info_hash: &InfoHash, peer: &mut peer::Peer) -> SwarmMetadata {
        peer.updated = CurrentClock::now();

        tracing::debug!(%info_hash, peer_id = %peer.peer_id, event = %peer.event, "announce");

        if peer.event.is_stopped() {
            self.remove_peer(info_hash, &peer.peer_id).unwrap_or_default()
        } else {
            self.upsert_peer(info_hash, peer)
        }
    }

    /// It inserts the peer into the swarm of the torrent, or replaces the
    /// record with the same peer ID, and returns the counters of the swarm.
    ///
    /// The peer is stored as it is. Use [`Tracker::announce`] to stamp it with
    /// the current time.
    pub fn upsert_peer(&self, info_hash: &InfoHash, peer: &peer::Peer) -> SwarmMetadata {
        self.torrents.upsert_peer(info_hash, peer)
    }

    /// It removes the peer from the swarm of the torrent.
    ///
    /// Returns the counters of the swarm after the change, or `None` if the
    /// torrent was never announced.
    pub fn remove_peer(&self, info_hash: &InfoHash, peer_id: &peer::Id) -> Option<SwarmMetadata> {
        self.torrents.remove_peer(info_hash, peer_id)
    }

    /// It removes the peers that have not announced for more than
    /// `max_peer_timeout` seconds and returns how many were removed.
    ///
    /// Swarms are never removed.
    pub fn cleanup_torrents(&self) -> usize {
        let timeout = Duration::from_secs(u64::from(self.policy.max_peer_timeout));

        // The application has been running for less than the timeout.
        let Some(current_cutoff) = CurrentClock::now_sub(&timeout) else {
            return 0;
        };

        self.torrents.remove_inactive_peers(current_cutoff)
    }

    /// The counters of one swarm, or `None` if the torrent was never announced.
    #[must_use]
    pub fn get_swarm_metadata(&self, info_hash: &InfoHash) -> Option<SwarmMetadata> {
        self.torrents.get_swarm_metadata(info_hash)
    }

    /// Number of torrents announced since the tracker started.
    #[must_use]
    pub fn number_of_torrents(&self) -> usize {
        self.torrents.len()
    }

    /// The statistics over every swarm.
    #[must_use]
    pub fn get_stats(&self) -> TrackerStats {
        statistics::aggregate(&self.torrents.snapshot_for_stats())
    }
}
