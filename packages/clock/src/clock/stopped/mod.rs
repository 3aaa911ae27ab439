/// Trait for types that can be used as a clock stopped at a given time.
#[allow(clippy::module_name_repetitions)]
pub struct StoppedClock {}

#[allow(clippy::module_name_repetitions)]
pub trait Stopped: clock::Time {
    /// It sets the clock to a given time.
    fn local_set(time: &DurationSinceAppStart);

    /// It sets the clock to the time the application started.
    fn local_set_to_app_start_time() {
        Self::local_set(&DurationSinceAppStart::ZERO);
    }

    /// It sets the clock to the time elapsed since the application started.
    fn local_set_to_working_time_now();

    /// It adds a `Duration` to the clock.
    ///
    /// # Errors
    ///
    /// Will return `IntErrorKind` if `duration` would overflow the internal `Duration`.
    fn local_add(duration: &Duration) -> Result<(), IntErrorKind>;

    /// It subtracts a `Duration` from the clock.
    ///
    /// # Errors
    ///
    /// Will return `IntErrorKind` if `duration` would underflow the internal `Duration`.
    fn local_sub(duration: &Duration) -> Result<(), IntErrorKind>;

    /// It resets the clock to the application start time.
    fn local_reset() {
        Self::local_set_to_app_start_time();
    }
}

use std::num::IntErrorKind;
use std::time::Duration;

use torrust_tracker_primitives::DurationSinceAppStart;

use super::Time;
use crate::clock;

impl Time for clock::Stopped {
    fn now() -> DurationSinceAppStart {
        detail::FIXED_TIME.with(|time| {
            return *time.borrow();
        })
    }

    fn dbg_clock_type() -> String {
        "Stopped".to_owned()
    }
}

impl Stopped for clock::Stopped {
    fn local_set(time: &DurationSinceAppStart) {
        detail::FIXED_TIME.with(|fixed_time| {
            *fixed_time.borrow_mut() = *time;
        });
    }

    fn local_set_to_working_time_now() {
        Self::local_set(&clock::Working::now());
    }

    fn local_add(duration: &Duration) -> Result<(), IntErrorKind> {
        let time = Self::now().checked_add(*duration).ok_or(IntErrorKind::PosOverflow)?;
        Self::local_set(&time);
        Ok(())
    }

    fn local_sub(duration: &Duration) -> Result<(), IntErrorKind> {
        let time = Self::now().checked_sub(*duration).ok_or(IntErrorKind::NegOverflow)?;
        Self::local_set(&time);
        Ok(())
    }
}


mod detail {
    use std::cell::RefCell;

    use torrust_tracker_primitives::DurationSinceAppStart;

    thread_local!(pub static FIXED_TIME: RefCell<DurationSinceAppStart> = const { RefCell::new(DurationSinceAppStart::ZERO) });
}
