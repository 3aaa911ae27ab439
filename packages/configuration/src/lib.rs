//! Configuration data structures for the Torrust swarm statistics tracker.
//!
//! The configuration is loaded with [`figment`] from three sources. From the
//! highest to the lowest priority:
//!
//! 1. Environment variables with the [`ENV_VAR_CONFIG_OVERRIDE_PREFIX`]
//!    prefix. Nested values use `__` as the section separator, for example
//!    `TORRUST_TRACKER_CONFIG_OVERRIDE_CORE__TRACKER_POLICY__MAX_PEER_TIMEOUT=60`.
//! 2. The whole TOML document in the `TORRUST_TRACKER_CONFIG_TOML` environment
//!    variable.
//! 3. The TOML file in the `TORRUST_TRACKER_CONFIG_TOML_PATH` environment
//!    variable, or the default path given by the application.
//!
//! Every value missing in all of them takes its default value:
//!
//! ```toml
//! [logging]
//! threshold = "info"
//! style = "default"
//!
//! [core]
//! inactive_peer_cleanup_interval = 600
//!
//! [core.tracker_policy]
//! max_peer_timeout = 900
//!
//! [http_stats]
//! enabled = true
//! bind_address = "0.0.0.0:7070"
//! ```
pub mod core;
pub mod http_stats;
pub mod logging;

use std::env;
use std::panic::Location;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use self::core::{Core, TrackerPolicy};
pub use self::http_stats::HttpStats;
pub use self::logging::{Logging, Style, Threshold};

// Environment variables

/// The whole `tracker.toml` file content. It has priority over the config file.
/// Even if the file is not on the default path.
pub const ENV_VAR_CONFIG_TOML: &str = "TORRUST_TRACKER_CONFIG_TOML";

/// The `tracker.toml` file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "TORRUST_TRACKER_CONFIG_TOML_PATH";

/// Prefix of the environment variables overriding single configuration values.
pub const ENV_VAR_CONFIG_OVERRIDE_PREFIX: &str = "TORRUST_TRACKER_CONFIG_OVERRIDE_";

/// Path separator in the overriding environment variables.
const CONFIG_OVERRIDE_SEPARATOR: &str = "__";

/// Information required for loading config
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml: Option<String>,
    config_toml_path: String,
}

impl Info {
    /// Build Configuration Info
    ///
    /// It reads the TOML document or the TOML file path from the environment.
    #[must_use]
    pub fn new(default_config_toml_path: String) -> Self {
        let config_toml = if let Ok(config_toml) = env::var(ENV_VAR_CONFIG_TOML) {
            println!("Loading configuration from environment variable:\n {config_toml}");
            Some(config_toml)
        } else {
            None
        };

        let config_toml_path = if let Ok(config_toml_path) = env::var(ENV_VAR_CONFIG_TOML_PATH) {
            println!("Loading configuration from file: `{config_toml_path}` ...");
            config_toml_path
        } else {
            println!("Loading configuration from default configuration file: `{default_config_toml_path}` ...");
            default_config_toml_path
        };

        Self {
            config_toml,
            config_toml_path,
        }
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// The sources could not be merged or a value has the wrong type.
    #[error("Failed processing the configuration: {source}, {location}")]
    ConfigError {
        source: Box<figment::Error>,
        location: &'static Location<'static>,
    },
}

impl From<figment::Error> for Error {
    #[track_caller]
    fn from(err: figment::Error) -> Self {
        Self::ConfigError {
            source: Box::new(err),
            location: Location::caller(),
        }
    }
}

/// Core configuration for the tracker.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct Configuration {
    /// Logging configuration
    #[serde(default)]
    pub logging: Logging,

    /// Core configuration.
    #[serde(default)]
    pub core: Core,

    /// The HTTP server exposing the statistics.
    #[serde(default)]
    pub http_stats: HttpStats,
}

impl Configuration {
    /// Loads the configuration from the `Info` struct.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the TOML document is malformed or a value has the
    /// wrong type.
    pub fn load(info: &Info) -> Result<Configuration, Error> {
        let figment = Figment::from(Serialized::defaults(Configuration::default()));

        let figment = if let Some(config_toml) = &info.config_toml {
            figment.merge(Toml::string(config_toml))
        } else {
            // A missing file is an empty provider.
            figment.merge(Toml::file(&info.config_toml_path))
        };

        let figment = figment.merge(Env::prefixed(ENV_VAR_CONFIG_OVERRIDE_PREFIX).split(CONFIG_OVERRIDE_SEPARATOR));

        let config: Configuration = figment.extract()?;

        Ok(config)
    }

    /// Encodes the configuration to TOML.
    ///
    /// # Panics
    ///
    /// Will panic if the configuration cannot be encoded. Every section only
    /// has plain values, so this can not happen.
    #[must_use]
    pub fn to_toml(&self) -> String {
        toml::to_string(self).expect("Could not encode TOML value")
    }
}
