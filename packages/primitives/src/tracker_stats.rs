use serde::{Deserialize, Serialize};

pub use crate::swarm_metadata::ClientCounts;

/// Aggregate statistics over every swarm known by the tracker.
///
/// Both partitions of the peers add up to `peers_all`:
///
/// - `peers_seeder_only + peers_leecher_only + peers_seeder_and_leecher`
/// - `peers_ipv4 + peers_ipv6`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TrackerStats {
    /// Swarms that received at least one announce.
    pub torrents: u64,
    /// Swarms with at least one peer.
    pub active_torrents: u64,
    /// Peer records in all swarms.
    pub peers_all: u64,
    /// Peers in swarms where every peer is a seeder.
    pub peers_seeder_only: u64,
    /// Peers in swarms where every peer is a leecher.
    pub peers_leecher_only: u64,
    /// Peers in swarms with both seeders and leechers.
    pub peers_seeder_and_leecher: u64,
    #[serde(rename = "peersIPv4")]
    pub peers_ipv4: u64,
    #[serde(rename = "peersIPv6")]
    pub peers_ipv6: u64,
    /// Client name, then client version, then number of peers.
    pub clients: ClientCounts,
}

impl TrackerStats {
    /// The numeric fields with the names they are exposed with.
    #[must_use]
    pub fn counters(&self) -> [(&'static str, u64); 8] {
        [
            ("torrents", self.torrents),
            ("activeTorrents", self.active_torrents),
            ("peersAll", self.peers_all),
            ("peersSeederOnly", self.peers_seeder_only),
            ("peersLeecherOnly", self.peers_leecher_only),
            ("peersSeederAndLeecher", self.peers_seeder_and_leecher),
            ("peersIPv4", self.peers_ipv4),
            ("peersIPv6", self.peers_ipv6),
        ]
    }
}
