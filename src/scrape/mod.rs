//! Day-range scraping.
//!
//! Days are independent and run in parallel on a dedicated rayon pool. The
//! games of one day run sequentially, in directory order, and their rows are
//! concatenated into four per-day CSV files:
//!
//! - `mlbam_atbat_YYYYMMDD.csv`
//! - `mlbam_pitch_YYYYMMDD.csv`
//! - `mlbam_action_YYYYMMDD.csv`
//! - `mlbam_boxscore_YYYYMMDD.csv`
//!
//! A game missing `game.xml`, `players.xml` or `inning/inning_all.xml` (or
//! with one of them unparseable) is skipped with a warning. The hit chart and
//! box score are optional.

pub mod error;
pub mod range;

pub use error::ScrapeError;
pub use range::DayRange;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::NaiveDate;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::Sentinels;
use crate::gameday::source::{
    BOXSCORE_DOCUMENT, GAME_DOCUMENT, INNING_ALL_DOCUMENT, INNING_HIT_DOCUMENT, PLAYERS_DOCUMENT,
};
use crate::gameday::{
    parse_game_number, BoxScore, GameContext, GamedayError, GamedaySource, HitChart, Node, Roster,
};
use crate::output::{write_csv, Record};
use crate::pbp::{PlayByPlay, Reconstructor};

/// Per-day output file for one record kind (`atbat`, `pitch`, `action`, `boxscore`).
pub fn output_file(dir: &Path, kind: &str, date: NaiveDate) -> PathBuf {
    dir.join(format!("mlbam_{}_{}.csv", kind, date.format("%Y%m%d")))
}

/// Everything reconstructed for one game.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameOutput {
    pub pbp: PlayByPlay,
    pub boxscore: Option<BoxScore>,
}

/// Rows of every processed game of one day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayOutput {
    pub pbp: PlayByPlay,
    pub boxscores: Vec<BoxScore>,
    pub games: usize,
    pub skipped: Vec<String>,
}

/// What one day produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub games: usize,
    pub skipped: usize,
    pub atbats: usize,
    pub pitches: usize,
    pub actions: usize,
    pub truncated: usize,
    /// Files written, empty when the day had no games.
    pub files: Vec<PathBuf>,
}

/// Scrapes day ranges from a [`GamedaySource`] into CSV files.
pub struct Scraper<S: GamedaySource> {
    source: S,
    output_dir: PathBuf,
    workers: usize,
    sentinels: Sentinels,
}

impl<S: GamedaySource> Scraper<S> {
    pub fn new(source: S, output_dir: impl Into<PathBuf>, workers: usize, sentinels: Sentinels) -> Self {
        Self {
            source,
            output_dir: output_dir.into(),
            workers: workers.max(1),
            sentinels,
        }
    }

    /// Scrape every day of `range`. Summaries come back in day order.
    pub fn run(&self, range: &DayRange) -> Result<Vec<DaySummary>, ScrapeError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| ScrapeError::OutputDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let days = range.days();
        let total = days.len();
        let completed = AtomicUsize::new(0);
        let process = |date: NaiveDate| {
            let summary = self.scrape_day(date);
            let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
            info!(%date, done, total, "day finished");
            summary
        };

        let pool = match rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers.min(total.max(1)))
            .thread_name(|i| format!("pitchpx-day-{}", i))
            .build()
        {
            Ok(pool) => pool,
            Err(e) => {
                warn!(error = %e, "failed to create thread pool, processing days sequentially");
                return days.into_iter().map(process).collect();
            }
        };

        pool.install(|| days.into_par_iter().map(process).collect())
    }

    /// Reconstruct one day and write its files.
    pub fn scrape_day(&self, date: NaiveDate) -> Result<DaySummary, ScrapeError> {
        let day = self.reconstruct_day(date)?;
        let mut summary = DaySummary {
            date,
            games: day.games,
            skipped: day.skipped.len(),
            atbats: day.pbp.atbats.len(),
            pitches: day.pbp.pitches.len(),
            actions: day.pbp.actions.len(),
            truncated: day.pbp.truncations.len(),
            files: Vec::new(),
        };
        if day.games == 0 {
            debug!(%date, "no games, nothing written");
            return Ok(summary);
        }

        summary.files = vec![
            self.write(output_file(&self.output_dir, "atbat", date), &day.pbp.atbats)?,
            self.write(output_file(&self.output_dir, "pitch", date), &day.pbp.pitches)?,
            self.write(output_file(&self.output_dir, "action", date), &day.pbp.actions)?,
            self.write(output_file(&self.output_dir, "boxscore", date), &day.boxscores)?,
        ];
        Ok(summary)
    }

    fn write<R: Record>(&self, path: PathBuf, records: &[R]) -> Result<PathBuf, ScrapeError> {
        write_csv(&path, records).map_err(|source| ScrapeError::Write {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), rows = records.len(), "wrote csv");
        Ok(path)
    }

    /// Reconstruct every game of `date` without writing anything.
    pub fn reconstruct_day(&self, date: NaiveDate) -> Result<DayOutput, ScrapeError> {
        let ids = self
            .source
            .game_ids(date)
            .map_err(|source| ScrapeError::ListGames { date, source })?;

        let mut day = DayOutput::default();
        for gid in ids {
            match self.game(date, &gid) {
                Ok(game) => {
                    day.pbp.append(game.pbp);
                    day.boxscores.extend(game.boxscore);
                    day.games += 1;
                }
                Err(error) => {
                    warn!(%date, game = %gid, %error, "skipping game");
                    day.skipped.push(gid);
                }
            }
        }
        Ok(day)
    }

    /// Reconstruct one game directory.
    pub fn game(&self, date: NaiveDate, gid: &str) -> Result<GameOutput, GamedayError> {
        let game_number = parse_game_number(gid)?;
        let game = GameContext::parse(
            &self.source.document(date, gid, GAME_DOCUMENT)?,
            date,
            game_number,
            &self.sentinels,
        )?;
        let roster = Roster::parse(
            &self.source.document(date, gid, PLAYERS_DOCUMENT)?,
            &self.sentinels,
        )?;
        let innings = Node::parse_document(
            INNING_ALL_DOCUMENT,
            &self.source.document(date, gid, INNING_ALL_DOCUMENT)?,
        )?;
        let hit_chart = self
            .optional(date, gid, INNING_HIT_DOCUMENT, HitChart::parse)
            .unwrap_or_default();
        let boxscore = self.optional(date, gid, BOXSCORE_DOCUMENT, |xml| {
            BoxScore::parse(xml, &game, &roster, &self.sentinels)
        });

        let pbp = Reconstructor::new(game, &roster, &hit_chart, &self.sentinels).reconstruct(&innings);
        info!(
            game = gid,
            atbats = pbp.atbats.len(),
            pitches = pbp.pitches.len(),
            actions = pbp.actions.len(),
            "game reconstructed"
        );
        Ok(GameOutput { pbp, boxscore })
    }

    /// Read and parse a document the game can do without.
    fn optional<T>(
        &self,
        date: NaiveDate,
        gid: &str,
        name: &str,
        parse: impl FnOnce(&str) -> Result<T, GamedayError>,
    ) -> Option<T> {
        let parsed = self.source.document(date, gid, name).and_then(|xml| parse(&xml));
        match parsed {
            Ok(value) => Some(value),
            Err(e) if e.is_not_found() => {
                debug!(game = gid, document = name, "optional document missing");
                None
            }
            Err(error) => {
                warn!(game = gid, document = name, %error, "ignoring unreadable document");
                None
            }
        }
    }
}
