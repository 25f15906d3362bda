//! Configuration management for pitchpx

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

impl Config {
    /// Get the config file path (~/.config/pitchpx/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from an explicit path, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check values that serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), String> {
        if self.scrape.workers == 0 {
            return Err("[scrape].workers must be at least 1".to_string());
        }
        if self.sentinels.unknown_full.is_empty() || self.sentinels.unknown_short.is_empty() {
            return Err("[sentinels] placeholders must not be empty".to_string());
        }
        Ok(())
    }

    /// Expand ~ in a configured directory path
    pub fn expand_path(dir: &str) -> PathBuf {
        if let Some(stripped) = dir.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        }
        PathBuf::from(dir)
    }

    /// Resolved gameday mirror root
    pub fn source_root(&self) -> PathBuf {
        Self::expand_path(&self.source.root)
    }

    /// Resolved CSV output directory
    pub fn output_directory(&self) -> PathBuf {
        Self::expand_path(&self.output.directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.source.root, "./gd2");
        assert_eq!(config.output.directory, ".");
        assert_eq!(config.scrape.workers, 4);
        assert_eq!(config.sentinels.unknown_full, "Unknown");
        assert_eq!(config.sentinels.unknown_short, "U");
        assert_eq!(config.log.level, "warn");
        assert!(!config.log.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config: Config = toml::from_str("[scrape]\nworkers = 8\n").unwrap();
        assert_eq!(config.scrape.workers, 8);
        assert_eq!(config.sentinels, Sentinels::default());
    }

    #[test]
    fn zero_workers_rejected() {
        let mut config = Config::default();
        config.scrape.workers = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_sentinel_rejected() {
        let mut config = Config::default();
        config.sentinels.unknown_short = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn expand_path_leaves_plain_paths() {
        assert_eq!(Config::expand_path("/tmp/gd2"), PathBuf::from("/tmp/gd2"));
        assert_eq!(Config::expand_path("out"), PathBuf::from("out"));
    }
}
