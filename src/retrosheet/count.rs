//! Ball/strike counting and plate-appearance termination.
//!
//! Both functions operate on the count *before* a pitch is applied. Callers
//! evaluate [`is_pa_terminal`] and [`advance_count`] with the same pre-pitch
//! tallies.

use std::fmt;

use super::event::EventCode;

/// Maximum balls tracked (ball four).
pub const MAX_BALLS: u8 = 4;
/// Maximum strikes tracked (strike three).
pub const MAX_STRIKES: u8 = 3;
/// A foul only adds a strike below this count.
pub const FOUL_STRIKE_LIMIT: u8 = 2;

/// One-character pitch result code as reported by the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PitchResult {
    /// "B": ball.
    Ball,
    /// "S": strike (called, swinging, foul tip).
    Strike,
    /// "C": called strike.
    CalledStrike,
    /// "F": foul.
    Foul,
    /// "X": ball in play.
    InPlay,
    /// Anything else, including the unknown placeholder.
    Other,
}

impl PitchResult {
    /// Parse a result code. Unrecognized codes map to [`PitchResult::Other`].
    pub fn from_code(code: &str) -> Self {
        match code {
            "B" => PitchResult::Ball,
            "S" => PitchResult::Strike,
            "C" => PitchResult::CalledStrike,
            "F" => PitchResult::Foul,
            "X" => PitchResult::InPlay,
            _ => PitchResult::Other,
        }
    }
}

/// Running ball/strike tally within one plate appearance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Count {
    pub balls: u8,
    pub strikes: u8,
}

impl Count {
    pub fn new(balls: u8, strikes: u8) -> Self {
        Self { balls, strikes }
    }

    /// The count after `result` is applied.
    pub fn advance(self, result: PitchResult) -> Self {
        let (balls, strikes) = advance_count(self.balls, self.strikes, result);
        Self { balls, strikes }
    }

    /// Whether a pitch thrown at this count ends the plate appearance.
    pub fn is_terminal(self, result: PitchResult, event_code: EventCode) -> bool {
        is_pa_terminal(self.balls, self.strikes, result, event_code)
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.balls, self.strikes)
    }
}

/// Advance a ball/strike tally by one pitch.
///
/// Balls cap at 4 and strikes at 3. A foul adds a strike only below two
/// strikes. Unrecognized results leave the count unchanged.
pub fn advance_count(balls: u8, strikes: u8, result: PitchResult) -> (u8, u8) {
    match result {
        PitchResult::Ball if balls < MAX_BALLS => (balls + 1, strikes),
        PitchResult::Strike | PitchResult::CalledStrike | PitchResult::InPlay
            if strikes < MAX_STRIKES =>
        {
            (balls, strikes + 1)
        }
        PitchResult::Foul if strikes < FOUL_STRIKE_LIMIT => (balls, strikes + 1),
        _ => (balls, strikes),
    }
}

/// Decide whether a pitch ends the plate appearance.
///
/// `balls`/`strikes` are the tallies before this pitch. A ball in play always
/// terminates; a strike on two strikes terminates a strikeout; ball four
/// terminates a walk or intentional walk.
pub fn is_pa_terminal(balls: u8, strikes: u8, result: PitchResult, event_code: EventCode) -> bool {
    match result {
        PitchResult::InPlay => true,
        PitchResult::Strike | PitchResult::CalledStrike => {
            event_code == EventCode::Strikeout && strikes == FOUL_STRIKE_LIMIT
        }
        PitchResult::Ball => event_code.is_walk() && balls == MAX_BALLS - 1,
        _ => false,
    }
}
