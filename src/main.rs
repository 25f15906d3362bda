//! pitchpx - CLI entry point

mod commands;

use anyhow::{Context, Result};
use clap::Parser;

use pitchpx::cli::{Cli, Commands, ConfigCommands};
use pitchpx::{logging, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    logging::init_from_config(&config.log, cli.verbose);

    match cli.command {
        Commands::Scrape {
            start,
            end,
            out,
            source,
            workers,
        } => commands::scrape::handle(
            &config,
            &start,
            &end,
            commands::scrape::Overrides {
                out,
                source,
                workers,
            },
        ),
        Commands::Classify { label, description } => {
            commands::classify::handle(&config, &label, description.as_deref())
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&config),
            ConfigCommands::Path => commands::config::handle_path(cli.config.as_deref()),
        },
    }
}
