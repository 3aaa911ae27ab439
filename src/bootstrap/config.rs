//! Initialize configuration from file or env var.
//!
//! All environment variables are prefixed with `TORRUST_TRACKER_`.

use torrust_tracker_configuration::{Configuration, Info};

// Default values
pub const DEFAULT_PATH_CONFIG: &str = "./share/default/config/tracker.development.toml";

/// It loads the application configuration from the environment.
///
/// There are three methods to inject the configuration:
///
/// 1. By using a config file: `tracker.toml`, in the path given by the
///    `TORRUST_TRACKER_CONFIG_TOML_PATH` environment variable or the
///    [`DEFAULT_PATH_CONFIG`].
/// 2. Environment variable: `TORRUST_TRACKER_CONFIG_TOML`. The variable contains the same contents as the `tracker.toml` file.
/// 3. Environment variables overriding single values, prefixed with
///    `TORRUST_TRACKER_CONFIG_OVERRIDE_`.
///
/// Each method has priority over the previous one.
///
/// Refer to the [configuration documentation](https://docs.rs/torrust-tracker-configuration) for the configuration options.
///
/// # Panics
///
/// Will panic if the configuration can not be loaded, for example when the
/// TOML document is malformed.
#[must_use]
pub fn initialize_configuration() -> Configuration {
    let info = Info::new(DEFAULT_PATH_CONFIG.to_string());

    Configuration::load(&info).expect("it should load the tracker configuration")
}
