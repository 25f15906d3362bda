//! Per-pitch rows.
//!
//! A [`PitchWalk`] threads the ball/strike tally and the running result and
//! pitch-type sequences through one at-bat's pitches in document order.

use std::sync::Arc;

use crate::gameday::{GameContext, PitchNode, GAME_HEADER};
use crate::output::{flag, float, number, Record};
use crate::retrosheet::{Count, EventCode, PitchResult};

use super::atbat::{PlateAppearance, PA_HEADER};

/// Separator between pitch types in `pitch_type_seq`.
pub const PITCH_TYPE_SEPARATOR: char = '|';

/// Pitch-specific columns, after the game and plate-appearance columns.
pub const PITCH_HEADER: [&str; 37] = [
    "pa_ball_ct",
    "pa_strike_ct",
    "pitch_seq",
    "pa_terminal_fl",
    "pa_event_cd",
    "pitch_res",
    "pitch_des",
    "pitch_id",
    "x",
    "y",
    "start_speed",
    "end_speed",
    "sz_top",
    "sz_bot",
    "pfx_x",
    "pfx_z",
    "px",
    "pz",
    "x0",
    "y0",
    "z0",
    "vx0",
    "vy0",
    "vz0",
    "ax",
    "ay",
    "az",
    "break_y",
    "break_angle",
    "break_length",
    "pitch_type",
    "pitch_type_seq",
    "type_confidence",
    "zone",
    "spin_dir",
    "spin_rate",
    "sv_id",
];

/// One pitch of one plate appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchRecord {
    pub game: Arc<GameContext>,
    pub pa: Arc<PlateAppearance>,
    /// Tally before this pitch.
    pub count: Count,
    /// Result codes up to and including this pitch.
    pub pitch_seq: String,
    /// Pitch types up to and including this pitch.
    pub pitch_type_seq: String,
    pub terminal: bool,
    pub event_cd: EventCode,
    pub pitch: PitchNode,
}

impl Record for PitchRecord {
    fn header() -> Vec<&'static str> {
        [&GAME_HEADER[..], &PA_HEADER[..], &PITCH_HEADER[..]].concat()
    }

    fn values(&self) -> Vec<String> {
        let mut values = self.game.values();
        values.extend(self.pa.values());
        values.extend([
            self.count.balls.to_string(),
            self.count.strikes.to_string(),
            self.pitch_seq.clone(),
            flag(self.terminal),
            self.event_cd.to_string(),
            self.pitch.result.clone(),
            self.pitch.des.clone(),
            number(self.pitch.id),
        ]);
        values.extend(self.pitch.trajectory.iter().map(|v| float(*v)));
        values.extend([
            self.pitch.pitch_type.clone(),
            self.pitch_type_seq.clone(),
            float(self.pitch.type_confidence),
            number(self.pitch.zone),
            float(self.pitch.spin_dir),
            float(self.pitch.spin_rate),
            self.pitch.sv_id.clone(),
        ]);
        values
    }
}

/// Running state of one at-bat's pitch sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitchWalk {
    event_cd: EventCode,
    count: Count,
    pitch_seq: String,
    pitch_type_seq: String,
    pitches: usize,
}

/// What one pitch contributes to its row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitchStep {
    pub count: Count,
    pub pitch_seq: String,
    pub pitch_type_seq: String,
    pub terminal: bool,
}

impl PitchWalk {
    /// Start an at-bat whose final outcome is `event_cd`.
    pub fn new(event_cd: EventCode) -> Self {
        Self {
            event_cd,
            count: Count::default(),
            pitch_seq: String::new(),
            pitch_type_seq: String::new(),
            pitches: 0,
        }
    }

    /// Apply one pitch.
    ///
    /// The returned step carries the pre-pitch tally, sequences that already
    /// include this pitch, and the terminal flag evaluated at the pre-pitch
    /// tally. The tally is advanced afterwards.
    pub fn step(&mut self, result: &str, pitch_type: &str) -> PitchStep {
        let code = PitchResult::from_code(result);
        let before = self.count;

        self.pitch_seq.push_str(result);
        if self.pitches > 0 {
            self.pitch_type_seq.push(PITCH_TYPE_SEPARATOR);
        }
        self.pitch_type_seq.push_str(pitch_type);
        self.pitches += 1;

        let terminal = before.is_terminal(code, self.event_cd);
        self.count = before.advance(code);

        PitchStep {
            count: before,
            pitch_seq: self.pitch_seq.clone(),
            pitch_type_seq: self.pitch_type_seq.clone(),
            terminal,
        }
    }

    /// Tally after every pitch applied so far.
    pub fn count(&self) -> Count {
        self.count
    }

    pub fn pitch_seq(&self) -> &str {
        &self.pitch_seq
    }

    pub fn pitch_type_seq(&self) -> &str {
        &self.pitch_type_seq
    }

    /// Emit a row per pitch and return them with the final sequences.
    pub fn assemble(
        mut self,
        pitches: &[PitchNode],
        game: &Arc<GameContext>,
        pa: &Arc<PlateAppearance>,
    ) -> (Vec<PitchRecord>, String, String) {
        let records = pitches
            .iter()
            .map(|pitch| {
                let step = self.step(&pitch.result, &pitch.pitch_type);
                PitchRecord {
                    game: Arc::clone(game),
                    pa: Arc::clone(pa),
                    count: step.count,
                    pitch_seq: step.pitch_seq,
                    pitch_type_seq: step.pitch_type_seq,
                    terminal: step.terminal,
                    event_cd: self.event_cd,
                    pitch: pitch.clone(),
                }
            })
            .collect();
        (records, self.pitch_seq, self.pitch_type_seq)
    }
}
