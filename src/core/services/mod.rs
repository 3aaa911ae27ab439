//! Tracker domain services. Core and statistics services.
//!
//! The services are the entry points of the delivery layer into the domain
//! layer. There are two kinds of services:
//!
//! - [Core tracker services](crate::core::Tracker): announce and cleanup.
//! - [Statistics services](crate::core::services::statistics): the swarm
//!   statistics.
pub mod statistics;

use std::sync::Arc;

use torrust_tracker_configuration::Configuration;

use crate::core::Tracker;

/// It returns a new tracker building its dependencies.
#[must_use]
pub fn tracker_factory(config: &Configuration) -> Tracker {
    Tracker::new(&config.core)
}

/// Same as [`tracker_factory`], shared between threads.
#[must_use]
pub fn shared_tracker_factory(config: &Configuration) -> Arc<Tracker> {
    Arc::new(tracker_factory(config))
}
