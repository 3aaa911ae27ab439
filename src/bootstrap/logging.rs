//! Setup for the application logging.
//!
//! It redirects the log info to the standard output with the log threshold defined in the configuration.
//!
//! - `Off`
//! - `Error`
//! - `Warn`
//! - `Info`
//! - `Debug`
//! - `Trace`
//!
//! The format of the lines is the configured [`Style`]: `default`, `pretty`,
//! `compact` or `json`.
//!
//! Refer to the [configuration crate documentation](https://docs.rs/torrust-tracker-configuration) to know how to change log settings.
use std::sync::Once;

use torrust_tracker_configuration::{Configuration, Style, Threshold};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing::Subscriber;
use tracing_subscriber::util::SubscriberInitExt;

static INIT: Once = Once::new();

/// It redirects the log info to the standard output with the log threshold defined in the configuration
pub fn setup(cfg: &Configuration) {
    let tracing_level = map_to_tracing_level_filter(cfg.logging.threshold);

    if tracing_level == LevelFilter::OFF {
        return;
    }

    INIT.call_once(|| {
        stdout_subscriber(tracing_level, cfg.logging.style).init();

        info!(style = %cfg.logging.style, "Logging initialized");
    });
}

fn map_to_tracing_level_filter(threshold: Threshold) -> LevelFilter {
    match threshold {
        Threshold::Off => LevelFilter::OFF,
        Threshold::Error => LevelFilter::ERROR,
        Threshold::Warn => LevelFilter::WARN,
        Threshold::Info => LevelFilter::INFO,
        Threshold::Debug => LevelFilter::DEBUG,
        Threshold::Trace => LevelFilter::TRACE,
    }
}

fn stdout_subscriber(filter: LevelFilter, style: Style) -> Box<dyn Subscriber + Send + Sync> {
    let builder = tracing_subscriber::fmt().with_max_level(filter).with_ansi(true);

    match style {
        Style::Default => Box::new(builder.finish()),
        Style::Pretty => Box::new(builder.pretty().with_file(true).finish()),
        Style::Compact => Box::new(builder.compact().finish()),
        Style::Json => Box::new(builder.json().finish()),
    }
}
