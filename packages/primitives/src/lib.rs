//! Primitive types for the [Torrust Tracker](https://docs.rs/torrust-tracker)
//! swarm statistics service.
//!
//! These structures are shared by the swarm repository, the core tracker and
//! the HTTP stats server:
//!
//! - [`InfoHash`](info_hash::InfoHash): the key of a swarm.
//! - [`Peer`](peer::Peer): one peer record inside a swarm.
//! - [`SwarmMetadata`](swarm_metadata::SwarmMetadata): the counters a swarm
//!   keeps up to date on every insertion and removal.
//! - [`TrackerStats`](tracker_stats::TrackerStats): the aggregate snapshot
//!   served by the stats endpoints.
use std::time::Duration;

pub mod announce_event;
pub mod info_hash;
pub mod peer;
pub mod swarm_metadata;
pub mod tracker_stats;

/// Monotonic time elapsed since the application started.
///
/// It is not related to the wall clock, so it never goes backwards when the
/// system time is changed.
pub type DurationSinceAppStart = Duration;

/// IP version used by a peer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IPVersion {
    IPv4,
    IPv6,
}
