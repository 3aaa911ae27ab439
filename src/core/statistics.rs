//! Aggregation of the swarm counters into the tracker statistics.
//!
//! Swarms are classified as a whole. All the peers of a swarm with only
//! seeders count as `peers_seeder_only`, all the peers of a swarm with only
//! leechers count as `peers_leecher_only`, and all the peers of a swarm with
//! both count as `peers_seeder_and_leecher`.
use torrust_tracker_primitives::swarm_metadata::{SwarmKind, SwarmMetadata};
use torrust_tracker_primitives::tracker_stats::TrackerStats;

/// It sums up the counters of every swarm.
///
/// Each element of `swarms` is one swarm known by the tracker, with or without
/// peers.
#[must_use]
pub fn aggregate(swarms: &[SwarmMetadata]) -> TrackerStats {
    let mut stats = TrackerStats::default();

    for swarm in swarms {
        let peers = swarm.peers();

        stats.torrents += 1;

        if swarm.is_active() {
            stats.active_torrents += 1;
        }

        stats.peers_all += peers;

        match swarm.kind() {
            SwarmKind::Empty => {}
            SwarmKind::SeedersOnly => stats.peers_seeder_only += peers,
            SwarmKind::LeechersOnly => stats.peers_leecher_only += peers,
            SwarmKind::Mixed => stats.peers_seeder_and_leecher += peers,
        }

        stats.peers_ipv4 += swarm.ipv4;
        stats.peers_ipv6 += swarm.ipv6;

        stats.clients += &swarm.clients;
    }

    stats
}
