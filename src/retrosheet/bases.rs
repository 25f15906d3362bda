//! Base occupancy strings.
//!
//! Occupancy is rendered as three characters, one per base: the base digit
//! when occupied, `_` otherwise (`"1_3"` means runners on first and third).

use std::fmt;

const BASE_LABELS: [&str; 3] = ["1B", "2B", "3B"];
const BASE_DIGITS: [char; 3] = ['1', '2', '3'];
const EMPTY: char = '_';

/// Which of first, second and third base are occupied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseOccupancy([bool; 3]);

impl BaseOccupancy {
    /// Occupancy from explicit flags for first, second and third.
    pub fn new(first: bool, second: bool, third: bool) -> Self {
        Self([first, second, third])
    }

    #[cfg(test)]
    fn is_occupied(&self, base: usize) -> bool {
        base >= 1 && base <= 3 && self.0[base - 1]
    }

    fn mark(&mut self, label: &str) {
        if let Some(index) = BASE_LABELS.iter().position(|b| *b == label) {
            self.0[index] = true;
        }
    }
}

impl fmt::Display for BaseOccupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (occupied, digit) in self.0.iter().zip(BASE_DIGITS) {
            let c = if *occupied { digit } else { EMPTY };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Start and end occupancy for one plate appearance.
///
/// Each item is a runner movement as `(start_base, end_base)` using the
/// feed's labels (`"1B"`, `"2B"`, `"3B"`; anything else, such as an empty
/// start for the batter or an empty end for a scored or retired runner,
/// marks nothing). Each base is tested independently, so several runners
/// moving at once produce a multi-digit string.
pub fn base_state<'a, I>(runners: I) -> (BaseOccupancy, BaseOccupancy)
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut start = BaseOccupancy::default();
    let mut end = BaseOccupancy::default();
    for (from, to) in runners {
        start.mark(from);
        end.mark(to);
    }
    (start, end)
}
