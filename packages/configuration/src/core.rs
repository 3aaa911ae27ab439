use derive_more::Constructor;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Core {
    /// Interval in seconds that the cleanup job will run to remove inactive
    /// peers from the swarms. Zero disables the job.
    #[serde(default = "Core::default_inactive_peer_cleanup_interval")]
    pub inactive_peer_cleanup_interval: u64,

    // Tracker policy configuration.
    #[serde(default = "Core::default_tracker_policy")]
    pub tracker_policy: TrackerPolicy,
}

impl Default for Core {
    fn default() -> Self {
        Self {
            inactive_peer_cleanup_interval: Self::default_inactive_peer_cleanup_interval(),
            tracker_policy: Self::default_tracker_policy(),
        }
    }
}

impl Core {
    fn default_inactive_peer_cleanup_interval() -> u64 {
        600
    }

    fn default_tracker_policy() -> TrackerPolicy {
        TrackerPolicy::default()
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Constructor)]
pub struct TrackerPolicy {
    /// Maximum time in seconds that a peer can be inactive before being
    /// considered an inactive peer. If a peer is inactive for more than this
    /// time, it will be removed from the swarm by the cleanup job.
    #[serde(default = "TrackerPolicy::default_max_peer_timeout")]
    pub max_peer_timeout: u32,
}

impl Default for TrackerPolicy {
    fn default() -> Self {
        Self {
            max_peer_timeout: Self::default_max_peer_timeout(),
        }
    }
}

impl TrackerPolicy {
    fn default_max_peer_timeout() -> u32 {
        900
    }
}
