//! The instant the application started.
use std::time::Instant;

lazy_static! {
    /// Origin of every [`Working`](crate::clock::Working) clock reading.
    pub static ref TIME_AT_APP_START: Instant = Instant::now();
}
