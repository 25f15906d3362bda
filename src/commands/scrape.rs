//! Scrape command handler

use std::path::PathBuf;

use anyhow::{Context, Result};

use pitchpx::gameday::LocalMirror;
use pitchpx::scrape::{DayRange, DaySummary, Scraper};
use pitchpx::Config;

/// Command-line overrides for the `[source]`, `[output]` and `[scrape]` sections.
#[derive(Debug, Default)]
pub struct Overrides {
    pub out: Option<PathBuf>,
    pub source: Option<PathBuf>,
    pub workers: Option<usize>,
}

/// Scrape `start..=end` and print one line per day.
pub fn handle(config: &Config, start: &str, end: &str, overrides: Overrides) -> Result<()> {
    let range = DayRange::parse(start, end).context("Invalid day range")?;
    let source_root = overrides.source.unwrap_or_else(|| config.source_root());
    let output_dir = overrides.out.unwrap_or_else(|| config.output_directory());
    let workers = overrides.workers.unwrap_or(config.scrape.workers);
    if workers == 0 {
        anyhow::bail!("--workers must be at least 1");
    }

    tracing::info!(
        source = %source_root.display(),
        out = %output_dir.display(),
        workers,
        days = range.len(),
        "starting scrape"
    );

    let scraper = Scraper::new(
        LocalMirror::new(&source_root),
        &output_dir,
        workers,
        config.sentinels.clone(),
    );
    let summaries = scraper
        .run(&range)
        .with_context(|| format!("Failed to scrape {} to {}", start, end))?;

    for summary in &summaries {
        println!("{}", summary_line(summary));
    }
    Ok(())
}

fn summary_line(summary: &DaySummary) -> String {
    let mut line = format!(
        "{}  games {}  at-bats {}  pitches {}  actions {}",
        summary.date.format("%Y%m%d"),
        summary.games,
        summary.atbats,
        summary.pitches,
        summary.actions,
    );
    if summary.skipped > 0 {
        line.push_str(&format!("  skipped {}", summary.skipped));
    }
    if summary.truncated > 0 {
        line.push_str(&format!("  truncated {}", summary.truncated));
    }
    line
}
