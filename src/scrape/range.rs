//! Inclusive day ranges from `YYYYMMDD` arguments.

use chrono::{Days, NaiveDate};

use super::error::ScrapeError;

/// Inclusive range of days to scrape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DayRange {
    /// Parse `start`/`end` as `YYYYMMDD`.
    ///
    /// Both must be exactly eight digits and a real calendar date, and
    /// `start` must not be after `end`.
    pub fn parse(start: &str, end: &str) -> Result<Self, ScrapeError> {
        let start = parse_day("start", start)?;
        let end = parse_day("end", end)?;
        Self::new(start, end)
    }

    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ScrapeError> {
        if start > end {
            return Err(ScrapeError::StartAfterEnd { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days, both ends included.
    pub fn len(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Every day from start to end.
    pub fn days(&self) -> Vec<NaiveDate> {
        let end = self.end;
        std::iter::successors(Some(self.start), |d| d.checked_add_days(Days::new(1)))
            .take_while(|d| *d <= end)
            .collect()
    }
}

fn parse_day(name: &'static str, value: &str) -> Result<NaiveDate, ScrapeError> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ScrapeError::BadFormat {
            name,
            value: value.to_string(),
        });
    }
    NaiveDate::parse_from_str(value, "%Y%m%d").map_err(|_| ScrapeError::BadDate {
        name,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn inclusive_days() {
        let range = DayRange::parse("20150830", "20150902").unwrap();
        assert_eq!(range.len(), 4);
        assert_eq!(
            range.days(),
            vec![ymd(2015, 8, 30), ymd(2015, 8, 31), ymd(2015, 9, 1), ymd(2015, 9, 2)]
        );
    }

    #[test]
    fn single_day() {
        let range = DayRange::parse("20150812", "20150812").unwrap();
        assert_eq!(range.days(), vec![ymd(2015, 8, 12)]);
    }

    #[test]
    fn rejects_bad_format() {
        for value in ["2015081", "201508120", "2015-8-1", "abcdefgh", ""] {
            let err = DayRange::parse(value, "20150812").unwrap_err();
            assert!(matches!(err, ScrapeError::BadFormat { name: "start", .. }), "{}", value);
            assert!(err.is_bad_parameter());
        }
    }

    #[test]
    fn rejects_impossible_dates() {
        let err = DayRange::parse("20150812", "20150230").unwrap_err();
        assert!(matches!(err, ScrapeError::BadDate { name: "end", .. }));
        assert!(DayRange::parse("20151301", "20151302").is_err());
    }

    #[test]
    fn rejects_reversed_range() {
        let err = DayRange::parse("20150813", "20150812").unwrap_err();
        assert_eq!(
            err.to_string(),
            "start date 2015-08-13 is after end date 2015-08-12"
        );
    }
}
