pub mod asserts;
pub mod client;
pub mod environment;
pub mod v1;

use torrust_tracker_swarm_stats::servers::http::server;

pub type Started = environment::Environment<server::Running>;
