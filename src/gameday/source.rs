//! Where gameday documents come from.
//!
//! MLBAM publishes one directory per game under
//! `year_YYYY/month_MM/day_DD/gid_YYYY_MM_DD_awymlb_hommlb_N/`. A
//! [`GamedaySource`] lists the game directories of a day and reads named
//! documents out of them; [`LocalMirror`] does so over a copy of that tree on
//! disk.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::debug;

use super::error::GamedayError;

/// Game metadata (teams, park, game type).
pub const GAME_DOCUMENT: &str = "game.xml";
/// Rosters of both teams.
pub const PLAYERS_DOCUMENT: &str = "players.xml";
/// Every inning's play-by-play in one document.
pub const INNING_ALL_DOCUMENT: &str = "inning/inning_all.xml";
/// Batted-ball locations.
pub const INNING_HIT_DOCUMENT: &str = "inning/inning_hit.xml";
/// Per-player box score lines.
pub const BOXSCORE_DOCUMENT: &str = "boxscore.xml";

/// Retrieval of raw gameday documents.
pub trait GamedaySource: Send + Sync {
    /// Game directory names (`gid_...`) for `date`, in directory order.
    /// A day without games yields an empty list.
    fn game_ids(&self, date: NaiveDate) -> Result<Vec<String>, GamedayError>;

    /// Contents of document `name` of game `gid` on `date`.
    fn document(&self, date: NaiveDate, gid: &str, name: &str) -> Result<String, GamedayError>;
}

/// A gd2 tree on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalMirror {
    root: PathBuf,
}

impl LocalMirror {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `root/year_YYYY/month_MM/day_DD`
    pub fn day_dir(&self, date: NaiveDate) -> PathBuf {
        self.root
            .join(date.format("year_%Y").to_string())
            .join(date.format("month_%m").to_string())
            .join(date.format("day_%d").to_string())
    }
}

impl GamedaySource for LocalMirror {
    fn game_ids(&self, date: NaiveDate) -> Result<Vec<String>, GamedayError> {
        let dir = self.day_dir(date);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %dir.display(), "no day directory");
                return Ok(Vec::new());
            }
            Err(source) => return Err(GamedayError::Io { path: dir, source }),
        };

        let mut ids: Vec<String> = entries
            .flatten()
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().to_str().map(String::from))
            .filter(|name| name.starts_with("gid_"))
            .collect();
        ids.sort();
        Ok(ids)
    }

    fn document(&self, date: NaiveDate, gid: &str, name: &str) -> Result<String, GamedayError> {
        let path = self.day_dir(date).join(gid).join(name);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(GamedayError::NotFound { path }),
            Err(source) => Err(GamedayError::Io { path, source }),
        }
    }
}
