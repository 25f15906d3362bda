//! pitchpx Library
//!
//! Rebuilds Retrosheet-style play-by-play datasets (at-bats, pitches,
//! actions, box scores) from MLBAM gameday XML documents.
//!
//! - [`gameday`] reads and types the raw documents
//! - [`retrosheet`] holds the pure coding rules
//! - [`pbp`] walks innings into flat records
//! - [`scrape`] runs day ranges in parallel and writes CSV

pub mod cli;
pub mod config;
pub mod gameday;
pub mod logging;
pub mod output;
pub mod pbp;
pub mod retrosheet;
pub mod scrape;

pub use config::{Config, Sentinels};
pub use gameday::{GamedaySource, LocalMirror};
pub use pbp::{PlayByPlay, Reconstructor};
pub use scrape::{DayRange, DaySummary, Scraper};
