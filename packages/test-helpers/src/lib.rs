//! Testing helpers for the Torrust swarm statistics tracker.
pub mod configuration;
