//! **Torrust Swarm Stats** is the swarm registry of a `BitTorrent` tracker and
//! the HTTP service exposing its statistics.
//!
//! The tracker keeps, for every torrent announced to it, the swarm of peers
//! sharing it. Each peer is classified when it is inserted or updated:
//!
//! - Seeder or leecher, from the number of bytes it has left to download.
//! - IPv4 or IPv6, from the address it announced from.
//! - Client software and version, from its peer ID.
//!
//! Every swarm keeps its own counters up to date, so the statistics over all
//! swarms are the sum of a few numbers per swarm instead of a walk over every
//! peer.
//!
//! # Components
//!
//! From the domain to the delivery layer:
//!
//! - [`core::Tracker`]: the announce entry point and the swarm repository
//!   owner. Transports decode announce requests and call
//!   [`Tracker::announce`](core::Tracker::announce).
//! - [`core::statistics`]: the aggregation of the per-swarm counters into a
//!   [`TrackerStats`](torrust_tracker_primitives::tracker_stats::TrackerStats).
//! - [`servers::http`]: the HTTP server rendering the statistics as JSON or
//!   HTML.
//! - [`bootstrap`]: configuration, logging and the application jobs.
//!
//! # Endpoints
//!
//! Endpoint | Response
//! ---|---
//! `GET /stats.json` | JSON
//! `GET /stats` with the `Accept: application/json` header | JSON
//! `GET /stats` | HTML
//! `GET /health_check` | JSON
//!
//! Sample JSON response:
//!
//! ```json
//! {
//!   "torrents": 1,
//!   "activeTorrents": 1,
//!   "peersAll": 1,
//!   "peersSeederOnly": 0,
//!   "peersLeecherOnly": 1,
//!   "peersSeederAndLeecher": 0,
//!   "peersIPv4": 1,
//!   "peersIPv6": 0,
//!   "clients": {
//!     "WebTorrent": {
//!       "0.91": 1
//!     }
//!   }
//! }
//! ```
//!
//! The HTML page exposes the eight counters in elements whose ids are the JSON
//! field names.
//!
//! # Configuration
//!
//! Refer to the [`torrust-tracker-configuration`](torrust_tracker_configuration)
//! crate.
use torrust_tracker_clock::clock;

pub mod app;
pub mod bootstrap;
pub mod core;
pub mod servers;

/// This code needs to be copied into each crate.
/// Working version, for production.
#[cfg(not(test))]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Working;

/// Stopped version, for testing.
#[cfg(test)]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Stopped;
