//! Tracker configuration factories for testing.
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use torrust_tracker_configuration::{Configuration, Threshold};

/// This configuration is used for testing. The statistics server binds to a
/// port chosen by the operating system, so more than one tracker can run at
/// the same time.
#[must_use]
pub fn ephemeral() -> Configuration {
    let mut config = Configuration::default();

    config.logging.threshold = Threshold::Off; // Change to `debug` for tests debugging

    config.http_stats.enabled = true;
    config.http_stats.bind_address = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0);

    config
}

/// Ephemeral configuration with the statistics server disabled.
#[must_use]
pub fn ephemeral_with_http_stats_disabled() -> Configuration {
    let mut config = ephemeral();

    config.http_stats.enabled = false;

    config
}

/// Ephemeral configuration where peers silent for more than
/// `max_peer_timeout` seconds are removed every
/// `inactive_peer_cleanup_interval` seconds.
#[must_use]
pub fn ephemeral_with_cleanup(inactive_peer_cleanup_interval: u64, max_peer_timeout: u32) -> Configuration {
    let mut config = ephemeral();

    config.core.inactive_peer_cleanup_interval = inactive_peer_cleanup_interval;
    config.core.tracker_policy.max_peer_timeout = max_peer_timeout;

    config
}
