use std::time::Duration;

use torrust_tracker_clock::clock::stopped::Stopped as _;
use torrust_tracker_clock::clock::{self, Time};

use crate::CurrentClock;

#[test]
fn it_should_use_stopped_time_for_testing() {
    assert_eq!(CurrentClock::dbg_clock_type(), "Stopped".to_owned());

    let time = CurrentClock::now();
    std::thread::sleep(Duration::from_millis(50));
    let time_2 = CurrentClock::now();

    assert_eq!(time, time_2);
}

#[test]
fn the_stopped_clock_should_be_moved_by_the_tests() {
    clock::Stopped::local_set(&Duration::from_secs(10));

    assert_eq!(clock::Stopped::now_sub(&Duration::from_secs(4)), Some(Duration::from_secs(6)));
    assert_eq!(clock::Stopped::now_sub(&Duration::from_secs(11)), None);

    clock::Stopped::local_reset();
}
