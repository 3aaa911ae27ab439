use std::time::Duration;

use torrust_tracker_primitives::DurationSinceAppStart;

use self::stopped::StoppedClock;
use self::working::WorkingClock;

pub mod stopped;
pub mod working;

/// A generic structure that represents a clock.
///
/// It can be either the working clock (production) or the stopped clock
/// (testing). It implements the `Time` trait, which gives you the current time.
#[derive(Debug)]
pub struct Clock<T> {
    clock: std::marker::PhantomData<T>,
}

/// The working clock. It returns the time elapsed since the application started.
pub type Working = Clock<WorkingClock>;
/// The stopped clock. It returns always the same fixed time.
pub type Stopped = Clock<StoppedClock>;

/// Trait for types that can be used as a monotonic clock.
pub trait Time: Sized {
    fn now() -> DurationSinceAppStart;

    fn dbg_clock_type() -> String;

    #[must_use]
    fn now_add(add_time: &Duration) -> Option<DurationSinceAppStart> {
        Self::now().checked_add(*add_time)
    }

    /// Returns `None` when the clock has not run for `sub_time` yet.
    #[must_use]
    fn now_sub(sub_time: &Duration) -> Option<DurationSinceAppStart> {
        Self::now().checked_sub(*sub_time)
    }
}
