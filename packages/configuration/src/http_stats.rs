use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::{Deserialize, Serialize};

/// Configuration for the HTTP server exposing the swarm statistics.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct HttpStats {
    /// Whether the statistics server is started or not.
    #[serde(default = "HttpStats::default_enabled")]
    pub enabled: bool,

    /// The address the server will bind to.
    /// The format is `ip:port`, for example `0.0.0.0:7070`. If you want to
    /// listen to all interfaces, use `0.0.0.0`. If you want the operating
    /// system to choose a random port, use port `0`.
    #[serde(default = "HttpStats::default_bind_address")]
    pub bind_address: SocketAddr,
}

impl Default for HttpStats {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            bind_address: Self::default_bind_address(),
        }
    }
}

impl HttpStats {
    fn default_enabled() -> bool {
        true
    }

    fn default_bind_address() -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)), 7070)
    }
}
