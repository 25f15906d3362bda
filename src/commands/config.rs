//! Config subcommands handler

use std::path::Path;

use anyhow::{Context, Result};

use pitchpx::Config;

/// Print the effective configuration as TOML.
pub fn handle_show(config: &Config) -> Result<()> {
    let toml = config.to_toml().context("Failed to render configuration")?;
    print!("{}", toml);
    Ok(())
}

/// Print the configuration file path in use.
pub fn handle_path(explicit: Option<&Path>) -> Result<()> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => Config::config_path()?,
    };
    println!("{}", path.display());
    Ok(())
}
