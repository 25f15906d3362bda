//! Plate appearances: the per-at-bat context and its result row.

use std::sync::Arc;

use crate::gameday::{AtBatNode, GameContext, HitLocation, PlayerNames, GAME_HEADER};
use crate::output::{float, number, Record};
use crate::retrosheet::{base_state, battedball_code, event_code, BaseOccupancy, BattedBall, EventCode};

use super::pitch::{PitchRecord, PitchWalk};
use super::{Half, Reconstructor};

/// Plate-appearance columns shared by at-bat and pitch rows.
pub const PA_HEADER: [&str; 17] = [
    "inning_number",
    "bat_home_id",
    "outs_ct",
    "pit_mlbid",
    "pit_first_name",
    "pit_last_name",
    "pit_box_name",
    "pit_hand_cd",
    "bat_mlbid",
    "bat_first_name",
    "bat_last_name",
    "bat_box_name",
    "bat_hand_cd",
    "ab_number",
    "start_bases",
    "end_bases",
    "event_outs_ct",
];

/// Result columns of an at-bat row.
pub const ATBAT_HEADER: [&str; 10] = [
    "ab_des",
    "event_tx",
    "event_cd",
    "battedball_cd",
    "hit_x",
    "hit_y",
    "ball_ct",
    "strike_ct",
    "pitch_seq",
    "pitch_type_seq",
];

/// Pitcher or batter of a plate appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub mlbid: String,
    pub names: PlayerNames,
    /// `L`, `R`, or the short placeholder.
    pub hand: String,
}

/// Context of one at-bat, copied into its at-bat row and every pitch row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlateAppearance {
    pub inning_number: u32,
    pub half: Half,
    /// Outs when the at-bat started.
    pub outs_ct: Option<u8>,
    pub pitcher: Participant,
    pub batter: Participant,
    pub ab_number: u32,
    pub start_bases: BaseOccupancy,
    pub end_bases: BaseOccupancy,
    /// Outs reported for the play (the at-bat's `o`).
    pub event_outs_ct: Option<u8>,
}

impl PlateAppearance {
    /// Cells for [`PA_HEADER`].
    pub fn values(&self) -> Vec<String> {
        vec![
            self.inning_number.to_string(),
            self.half.bat_home_id().to_string(),
            number(self.outs_ct),
            self.pitcher.mlbid.clone(),
            self.pitcher.names.first.clone(),
            self.pitcher.names.last.clone(),
            self.pitcher.names.box_name.clone(),
            self.pitcher.hand.clone(),
            self.batter.mlbid.clone(),
            self.batter.names.first.clone(),
            self.batter.names.last.clone(),
            self.batter.names.box_name.clone(),
            self.batter.hand.clone(),
            self.ab_number.to_string(),
            self.start_bases.to_string(),
            self.end_bases.to_string(),
            number(self.event_outs_ct),
        ]
    }
}

/// One plate appearance with its outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct AtBatRecord {
    pub game: Arc<GameContext>,
    pub pa: Arc<PlateAppearance>,
    pub ab_des: String,
    pub event_tx: String,
    pub event_cd: EventCode,
    pub battedball_cd: Option<BattedBall>,
    pub hit: Option<HitLocation>,
    /// Balls and strikes as reported by the at-bat itself.
    pub ball_ct: Option<u8>,
    pub strike_ct: Option<u8>,
    pub pitch_seq: String,
    pub pitch_type_seq: String,
}

impl Record for AtBatRecord {
    fn header() -> Vec<&'static str> {
        [&GAME_HEADER[..], &PA_HEADER[..], &ATBAT_HEADER[..]].concat()
    }

    fn values(&self) -> Vec<String> {
        let mut values = self.game.values();
        values.extend(self.pa.values());
        values.extend([
            self.ab_des.clone(),
            self.event_tx.clone(),
            self.event_cd.to_string(),
            self.battedball_cd.map(BattedBall::as_str).unwrap_or_default().to_string(),
            float(self.hit.map(|h| h.x)),
            float(self.hit.map(|h| h.y)),
            number(self.ball_ct),
            number(self.strike_ct),
            self.pitch_seq.clone(),
            self.pitch_type_seq.clone(),
        ]);
        values
    }
}

impl Reconstructor<'_> {
    /// Assemble one at-bat and its pitches.
    ///
    /// `outs_before` is the running out count threaded by the half-inning
    /// walk.
    pub fn plate_appearance(
        &self,
        node: &AtBatNode,
        inning: u32,
        half: Half,
        outs_before: Option<u8>,
    ) -> (AtBatRecord, Vec<PitchRecord>) {
        let event_cd = event_code(&node.event, &node.des);
        let battedball_cd = battedball_code(event_cd, &node.event, &node.des);
        let (start_bases, end_bases) = base_state(node.movements());

        let pa = Arc::new(PlateAppearance {
            inning_number: inning,
            half,
            outs_ct: outs_before,
            pitcher: Participant {
                mlbid: node.pitcher.clone(),
                names: self.player_names(&node.pitcher, "pitcher"),
                hand: node.p_throws.clone(),
            },
            batter: Participant {
                mlbid: node.batter.clone(),
                names: self.player_names(&node.batter, "batter"),
                hand: node.stand.clone(),
            },
            ab_number: node.num,
            start_bases,
            end_bases,
            event_outs_ct: node.outs,
        });

        let (pitches, pitch_seq, pitch_type_seq) =
            PitchWalk::new(event_cd).assemble(&node.pitches, self.game(), &pa);

        let atbat = AtBatRecord {
            game: Arc::clone(self.game()),
            pa,
            ab_des: node.des.clone(),
            event_tx: node.event.clone(),
            event_cd,
            battedball_cd,
            hit: self.hit_location(inning, &node.pitcher, &node.batter),
            ball_ct: node.balls,
            strike_ct: node.strikes,
            pitch_seq,
            pitch_type_seq,
        };
        (atbat, pitches)
    }
}
