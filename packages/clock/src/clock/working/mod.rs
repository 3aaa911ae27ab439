use torrust_tracker_primitives::DurationSinceAppStart;

use crate::{clock, static_time};

#[allow(clippy::module_name_repetitions)]
pub struct WorkingClock;

impl clock::Time for clock::Working {
    fn now() -> DurationSinceAppStart {
        static_time::TIME_AT_APP_START.elapsed()
    }

    fn dbg_clock_type() -> String {
        "Working".to_owned()
    }
}
