//! CLI definitions for pitchpx
//!
//! Kept apart from main.rs so xtask can render the man page and COMMANDS.md
//! from the same clap structure.

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

/// Clap styles: green headers and literals, red errors.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

/// Package version with the git revision appended when known.
pub fn version_string() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if sha != "unknown" => format!("{} ({})", env!("CARGO_PKG_VERSION"), sha),
        _ => env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Parser)]
#[command(name = "pitchpx")]
#[command(about = "[ pitchpx ] - rebuild MLBAM gameday play-by-play into Retrosheet-style CSV")]
#[command(
    long_about = "pitchpx - rebuild MLBAM gameday play-by-play into Retrosheet-style CSV.

pitchpx reads the gameday XML documents of every game in a day range from a
local gd2 mirror (year_YYYY/month_MM/day_DD/gid_*) and writes one CSV file per
record kind and day: at-bats, pitches, actions and box scores.

QUICK START:
    pitchpx scrape --start 20150812 --end 20150812     Scrape one day
    pitchpx classify \"Grounded Into DP\"                 Show an event code
    pitchpx config show                                 Show configuration

Settings are read from ~/.config/pitchpx/config.toml (or --config)."
)]
#[command(version = version_string())]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Configuration file to use instead of ~/.config/pitchpx/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG still wins)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rebuild play-by-play datasets for a range of days
    #[command(long_about = "Rebuild play-by-play datasets for a range of days.

Every game directory of every day from --start to --end (inclusive) is read
from the gameday mirror. Each day with at least one game writes four files to
the output directory:

    mlbam_atbat_YYYYMMDD.csv
    mlbam_pitch_YYYYMMDD.csv
    mlbam_action_YYYYMMDD.csv
    mlbam_boxscore_YYYYMMDD.csv

Days run in parallel on --workers threads. Games missing game.xml,
players.xml or inning/inning_all.xml are skipped with a warning.

EXAMPLES:
    pitchpx scrape --start 20150812 --end 20150812
    pitchpx scrape --start 20150801 --end 20150831 --out data/ --workers 8
    pitchpx scrape --start 20150812 --end 20150812 --source /mnt/gd2")]
    Scrape {
        /// First day, YYYYMMDD
        #[arg(long, value_name = "YYYYMMDD")]
        start: String,
        /// Last day, YYYYMMDD (inclusive)
        #[arg(long, value_name = "YYYYMMDD")]
        end: String,
        /// Output directory (overrides [output].directory)
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
        /// Gameday mirror root (overrides [source].root)
        #[arg(long, value_name = "DIR")]
        source: Option<PathBuf>,
        /// Parallel day workers (overrides [scrape].workers)
        #[arg(long, value_name = "N")]
        workers: Option<usize>,
    },

    /// Classify an event label into Retrosheet codes
    #[command(long_about = "Classify an event label into Retrosheet codes.

Prints the event code and the batted-ball code (or '-' when none applies).
Runner-out labels such as 'Runner Out' look at the description to tell
caught stealing from a pickoff.

EXAMPLES:
    pitchpx classify Double \"Kyle Seager doubles on a line drive to right fielder.\"
    pitchpx classify \"Strikeout - DP\"
    pitchpx classify \"Runner Out\" \"Mike Trout caught stealing 2nd base\"")]
    Classify {
        /// Event label as reported by the feed
        label: String,
        /// At-bat description
        description: Option<String>,
    },

    /// Inspect configuration
    #[command(
        subcommand,
        long_about = "Inspect the pitchpx configuration.

Configuration is stored in ~/.config/pitchpx/config.toml. Every section is
optional; missing values use their defaults.

EXAMPLES:
    pitchpx config show          Display the effective configuration
    pitchpx config path          Print the config file location"
    )]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    #[command(long_about = "Display the effective configuration in TOML format.

Values absent from the file are shown with their defaults.

EXAMPLE:
    pitchpx config show")]
    Show,
    /// Print the configuration file path
    Path,
}
