//! Tracing subscriber setup for the `pitchpx` binary.
//!
//! Log lines go to stderr so that command output on stdout stays clean.
//! `RUST_LOG` takes precedence over the configured level.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogConfig;

/// Install the global subscriber. Later calls are ignored.
pub fn init_tracing(json: bool, level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr).json())
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
            .ok();
    }
}

/// Install the subscriber described by the `[log]` config section, with
/// `verbose` forcing debug output.
pub fn init_from_config(log: &LogConfig, verbose: bool) {
    let level = if verbose { "debug" } else { log.level.as_str() };
    init_tracing(log.json, level);
}
