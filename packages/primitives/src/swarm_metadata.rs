//! Counters a swarm keeps up to date while peers come and go.
//!
//! The counters are adjusted on every insertion, update and removal of a peer,
//! so reading them never requires walking the peer list.
use std::collections::BTreeMap;
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::IPVersion;

/// Number of peers per client name and client version.
///
/// Serialized as a nested map: `{ "<name>": { "<version>": <count> } }`.
/// Entries that drop to zero are pruned so an empty swarm has an empty map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientCounts(BTreeMap<String, BTreeMap<String, u64>>);

impl ClientCounts {
    pub fn increment(&mut self, name: &str, version: &str) {
        *self
            .0
            .entry(name.to_owned())
            .or_default()
            .entry(version.to_owned())
            .or_default() += 1;
    }

    pub fn decrement(&mut self, name: &str, version: &str) {
        let Some(versions) = self.0.get_mut(name) else {
            return;
        };

        if let Some(count) = versions.get_mut(version) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                versions.remove(version);
            }
        }

        if versions.is_empty() {
            self.0.remove(name);
        }
    }

    /// Number of peers using the given client name and version.
    #[must_use]
    pub fn get(&self, name: &str, version: &str) -> u64 {
        self.0.get(name).and_then(|versions| versions.get(version)).copied().unwrap_or_default()
    }

    /// Number of peers counted over all clients and versions.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.values().flat_map(BTreeMap::values).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeMap<String, u64>)> {
        self.0.iter()
    }
}

impl AddAssign<&ClientCounts> for ClientCounts {
    fn add_assign(&mut self, rhs: &ClientCounts) {
        for (name, versions) in &rhs.0 {
            let own = self.0.entry(name.clone()).or_default();
            for (version, count) in versions {
                *own.entry(version.clone()).or_default() += count;
            }
        }
    }
}

/// How a swarm is classified for the statistics.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SwarmKind {
    /// No peers.
    Empty,
    /// Every peer is a seeder.
    SeedersOnly,
    /// Every peer is a leecher.
    LeechersOnly,
    /// At least one seeder and one leecher.
    Mixed,
}

/// Swarm statistics for one torrent.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SwarmMetadata {
    /// Peers with nothing left to download.
    pub seeders: u64,
    /// Peers that still have bytes to download, or did not report it.
    pub leechers: u64,
    /// Peers announcing from an IPv4 address.
    pub ipv4: u64,
    /// Peers announcing from an IPv6 address.
    pub ipv6: u64,
    /// Peers per client software.
    pub clients: ClientCounts,
}

impl SwarmMetadata {
    #[must_use]
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Total number of peers in the swarm.
    #[must_use]
    pub fn peers(&self) -> u64 {
        self.seeders + self.leechers
    }

    /// A swarm is active while it has at least one peer.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.peers() > 0
    }

    #[must_use]
    pub fn kind(&self) -> SwarmKind {
        match (self.seeders, self.leechers) {
            (0, 0) => SwarmKind::Empty,
            (_, 0) => SwarmKind::SeedersOnly,
            (0, _) => SwarmKind::LeechersOnly,
            _ => SwarmKind::Mixed,
        }
    }

    /// Counts a peer that joined the swarm.
    pub fn count_peer(&mut self, is_seeder: bool, ip_version: IPVersion, (client_name, client_version): (&str, &str)) {
        if is_seeder {
            self.seeders += 1;
        } else {
            self.leechers += 1;
        }

        match ip_version {
            IPVersion::IPv4 => self.ipv4 += 1,
            IPVersion::IPv6 => self.ipv6 += 1,
        }

        self.clients.increment(client_name, client_version);
    }

    /// Discounts a peer that left the swarm. It must have been counted with the
    /// same arguments before.
    pub fn discount_peer(&mut self, is_seeder: bool, ip_version: IPVersion, (client_name, client_version): (&str, &str)) {
        if is_seeder {
            self.seeders = self.seeders.saturating_sub(1);
        } else {
            self.leechers = self.leechers.saturating_sub(1);
        }

        match ip_version {
            IPVersion::IPv4 => self.ipv4 = self.ipv4.saturating_sub(1),
            IPVersion::IPv6 => self.ipv6 = self.ipv6.saturating_sub(1),
        }

        self.clients.decrement(client_name, client_version);
    }
}
