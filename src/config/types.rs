//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub scrape: ScrapeConfig,
    #[serde(default)]
    pub sentinels: Sentinels,
    #[serde(default)]
    pub log: LogConfig,
}

/// Where gameday documents are read from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Root of a local gd2 mirror (year_YYYY/month_MM/day_DD/gid_*)
    #[serde(default = "default_source_root")]
    pub root: String,
}

pub fn default_source_root() -> String {
    "./gd2".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            root: default_source_root(),
        }
    }
}

/// Where CSV datasets are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_directory")]
    pub directory: String,
}

pub fn default_output_directory() -> String {
    ".".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
        }
    }
}

/// Day fan-out settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Worker threads used to process days in parallel
    #[serde(default = "default_workers")]
    pub workers: usize,
}

pub fn default_workers() -> usize {
    4
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
        }
    }
}

/// Placeholder values written when the feed has no value.
///
/// Passed by reference into every assembler; never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentinels {
    /// Long placeholder (names, descriptions, labels)
    #[serde(default = "default_unknown_full")]
    pub unknown_full: String,
    /// Short placeholder (hands, one-character codes)
    #[serde(default = "default_unknown_short")]
    pub unknown_short: String,
}

pub fn default_unknown_full() -> String {
    "Unknown".to_string()
}

pub fn default_unknown_short() -> String {
    "U".to_string()
}

impl Default for Sentinels {
    fn default() -> Self {
        Self {
            unknown_full: default_unknown_full(),
            unknown_short: default_unknown_short(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default level when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit newline-delimited JSON instead of text
    #[serde(default)]
    pub json: bool,
}

pub fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
