//! Time related functions and types.
//!
//! The swarm repository only needs to compare the time of the last announce of
//! every peer with the current time, so the clocks in this crate are
//! monotonic: they measure the [`DurationSinceAppStart`](torrust_tracker_primitives::DurationSinceAppStart),
//! the time elapsed since the application started. Changing the system time
//! does not make peers expire early or late.
//!
//! There are two clocks:
//!
//! - [`Working`](clock::Working): reads the elapsed time. Used in production.
//! - [`Stopped`](clock::Stopped): returns a fixed time that tests can move
//!   forwards and backwards. The fixed time is local to the thread.
//!
//! Crates select one of them with a `CurrentClock` alias that switches on
//! `cfg(test)`.

pub mod clock;
pub mod static_time;

#[macro_use]
extern crate lazy_static;

/// This code needs to be copied into each crate.
/// Working version, for production.
#[cfg(not(test))]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Working;

/// Stopped version, for testing.
#[cfg(test)]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Stopped;
