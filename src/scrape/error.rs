//! Scrape errors.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::gameday::GamedayError;

/// Errors raised by day-range parsing and the per-day pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("{name} must be 8 digits (YYYYMMDD), got {value:?}")]
    BadFormat { name: &'static str, value: String },

    #[error("{name} is not a valid date: {value:?}")]
    BadDate { name: &'static str, value: String },

    #[error("start date {start} is after end date {end}")]
    StartAfterEnd { start: NaiveDate, end: NaiveDate },

    #[error("Failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to list games for {date}: {source}")]
    ListGames {
        date: NaiveDate,
        #[source]
        source: GamedayError,
    },
}

impl ScrapeError {
    /// True for errors caused by the requested day parameters.
    pub fn is_bad_parameter(&self) -> bool {
        matches!(
            self,
            ScrapeError::BadFormat { .. }
                | ScrapeError::BadDate { .. }
                | ScrapeError::StartAfterEnd { .. }
        )
    }
}
