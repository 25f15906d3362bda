//! Outcome classification for plate appearances.
//!
//! Maps the free-text event label reported by the gameday feed (and, for
//! runner outs, the longer at-bat narrative) onto Retrosheet event codes and
//! batted-ball codes.
//!
//! Classification is an ordered table of [`EventRule`]s evaluated top to
//! bottom; the first matching rule wins. Every rule is addressable so the
//! priority order can be audited and tested row by row.
//!
//! # Example
//!
//! ```
//! use pitchpx::retrosheet::{battedball_code, event_code, BattedBall, EventCode};
//!
//! let code = event_code("Double", "Kyle Seager doubles on a line drive to right fielder.");
//! assert_eq!(code, EventCode::Double);
//! assert_eq!(code.code(), 21);
//!
//! let bb = battedball_code(code, "Double", "Kyle Seager doubles on a line drive to right fielder.");
//! assert_eq!(bb, Some(BattedBall::LineDrive));
//! ```

use std::fmt;

use serde::Serialize;

// ============================================================================
// Codes
// ============================================================================

/// Retrosheet event code for the final outcome of a plate appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum EventCode {
    /// Unclassified outcome (code 0).
    Unknown = 0,
    /// Generic out: fly, line, pop, ground, force, double/triple play (code 2).
    GenericOut = 2,
    /// Strikeout (code 3).
    Strikeout = 3,
    /// Caught stealing (code 6).
    CaughtStealing = 6,
    /// Pickoff (code 8).
    PickOff = 8,
    /// Walk (code 14).
    Walk = 14,
    /// Intentional walk (code 15).
    IntentionalWalk = 15,
    /// Hit by pitch (code 16).
    HitByPitch = 16,
    /// Interference (code 17).
    Interference = 17,
    /// Error (code 18).
    Error = 18,
    /// Fielder's choice (code 19).
    FieldersChoice = 19,
    /// Single (code 20).
    Single = 20,
    /// Double (code 21).
    Double = 21,
    /// Triple (code 22).
    Triple = 22,
    /// Home run (code 23).
    HomeRun = 23,
}

impl EventCode {
    /// Numeric Retrosheet code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// True for singles, doubles, triples and home runs.
    pub fn is_hit(self) -> bool {
        matches!(
            self,
            EventCode::Single | EventCode::Double | EventCode::Triple | EventCode::HomeRun
        )
    }

    /// True when the plate appearance ends on ball four.
    pub fn is_walk(self) -> bool {
        matches!(self, EventCode::Walk | EventCode::IntentionalWalk)
    }
}

impl fmt::Display for EventCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Trajectory shape of a ball put in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BattedBall {
    /// Ground ball ("G").
    GroundBall,
    /// Line drive ("L").
    LineDrive,
    /// Fly ball ("F").
    FlyBall,
    /// Pop up ("P").
    PopUp,
}

impl BattedBall {
    /// Single-letter Retrosheet code.
    pub fn as_str(self) -> &'static str {
        match self {
            BattedBall::GroundBall => "G",
            BattedBall::LineDrive => "L",
            BattedBall::FlyBall => "F",
            BattedBall::PopUp => "P",
        }
    }
}

impl fmt::Display for BattedBall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Label sets
// ============================================================================

pub const FLY_OUT_LABELS: &[&str] = &["flyout", "fly out", "sac fly", "sac fly dp"];
pub const LINE_OUT_LABELS: &[&str] = &["lineout", "line out", "bunt lineout"];
pub const POP_OUT_LABELS: &[&str] = &["pop out", "bunt pop out"];
pub const GROUND_OUT_LABELS: &[&str] = &[
    "groundout",
    "ground out",
    "sac bunt",
    "bunt groundout",
    "grounded into dp",
];
/// Generic outs whose shape is only known from the narrative.
pub const OTHER_OUT_LABELS: &[&str] = &["forceout", "double play", "triple play", "sacrifice bunt d"];
pub const STRIKEOUT_LABELS: &[&str] = &["strikeout", "strikeout - dp"];
pub const WALK_LABELS: &[&str] = &["walk"];
pub const INTENT_WALK_LABELS: &[&str] = &["intent walk"];
pub const HIT_BY_PITCH_LABELS: &[&str] = &["hit by pitch"];
pub const FIELDERS_CHOICE_LABELS: &[&str] = &["fielders choice out", "fielders choice"];
pub const SINGLE_LABELS: &[&str] = &["single"];
pub const DOUBLE_LABELS: &[&str] = &["double"];
pub const TRIPLE_LABELS: &[&str] = &["triple"];
pub const HOME_RUN_LABELS: &[&str] = &["home run"];

/// Narrative keywords that resolve a "runner out" label.
const RUNNER_OUT_KEYWORDS: &[(&str, EventCode)] = &[
    ("caught stealing", EventCode::CaughtStealing),
    ("picks off", EventCode::PickOff),
];

/// Narrative keywords for batted-ball shape, in priority order.
const BATTED_BALL_KEYWORDS: &[(&str, BattedBall)] = &[
    ("ground", BattedBall::GroundBall),
    ("lines", BattedBall::LineDrive),
    ("on a line drive", BattedBall::LineDrive),
    ("flies", BattedBall::FlyBall),
    ("fly ball", BattedBall::FlyBall),
    ("pops", BattedBall::PopUp),
    ("pop up", BattedBall::PopUp),
];

// ============================================================================
// Rule table
// ============================================================================

/// How a rule tests the normalized (trimmed, lower-cased) event label.
#[derive(Debug, Clone, Copy)]
pub enum LabelMatch {
    /// Label equals one of the listed values.
    OneOf(&'static [&'static str]),
    /// Label contains the substring anywhere.
    Contains(&'static str),
    /// Label ends with the suffix.
    EndsWith(&'static str),
}

impl LabelMatch {
    fn matches(&self, label: &str) -> bool {
        match self {
            LabelMatch::OneOf(set) => set.contains(&label),
            LabelMatch::Contains(needle) => label.contains(needle),
            LabelMatch::EndsWith(suffix) => label.ends_with(suffix),
        }
    }
}

/// What a matching rule resolves to.
#[derive(Debug, Clone, Copy)]
pub enum RuleOutcome {
    /// A fixed event code.
    Code(EventCode),
    /// Scan the narrative for keywords; fall back to [`EventCode::Unknown`].
    FromDescription(&'static [(&'static str, EventCode)]),
}

/// One row of the classification table.
#[derive(Debug, Clone, Copy)]
pub struct EventRule {
    pub label: LabelMatch,
    pub outcome: RuleOutcome,
}

const fn rule(label: LabelMatch, code: EventCode) -> EventRule {
    EventRule {
        label,
        outcome: RuleOutcome::Code(code),
    }
}

/// Classification rules in priority order.
pub const EVENT_RULES: &[EventRule] = &[
    rule(LabelMatch::OneOf(FLY_OUT_LABELS), EventCode::GenericOut),
    rule(LabelMatch::OneOf(LINE_OUT_LABELS), EventCode::GenericOut),
    rule(LabelMatch::OneOf(POP_OUT_LABELS), EventCode::GenericOut),
    rule(LabelMatch::OneOf(GROUND_OUT_LABELS), EventCode::GenericOut),
    rule(LabelMatch::OneOf(OTHER_OUT_LABELS), EventCode::GenericOut),
    rule(LabelMatch::OneOf(STRIKEOUT_LABELS), EventCode::Strikeout),
    rule(LabelMatch::OneOf(WALK_LABELS), EventCode::Walk),
    rule(LabelMatch::OneOf(INTENT_WALK_LABELS), EventCode::IntentionalWalk),
    rule(LabelMatch::OneOf(HIT_BY_PITCH_LABELS), EventCode::HitByPitch),
    rule(LabelMatch::Contains("interference"), EventCode::Interference),
    rule(LabelMatch::EndsWith("error"), EventCode::Error),
    rule(LabelMatch::OneOf(FIELDERS_CHOICE_LABELS), EventCode::FieldersChoice),
    rule(LabelMatch::OneOf(SINGLE_LABELS), EventCode::Single),
    rule(LabelMatch::OneOf(DOUBLE_LABELS), EventCode::Double),
    rule(LabelMatch::OneOf(TRIPLE_LABELS), EventCode::Triple),
    rule(LabelMatch::OneOf(HOME_RUN_LABELS), EventCode::HomeRun),
    EventRule {
        label: LabelMatch::OneOf(&["runner out"]),
        outcome: RuleOutcome::FromDescription(RUNNER_OUT_KEYWORDS),
    },
];

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Index of the first rule in [`EVENT_RULES`] matching the label, if any.
pub fn matching_rule(event_label: &str) -> Option<usize> {
    let label = normalize(event_label);
    EVENT_RULES.iter().position(|r| r.label.matches(&label))
}

/// Classify a plate appearance outcome.
///
/// Both arguments are matched case-insensitively. Callers substitute a
/// placeholder for absent text rather than passing an empty string. Any
/// input that no rule recognizes yields [`EventCode::Unknown`].
pub fn event_code(event_label: &str, description: &str) -> EventCode {
    let Some(index) = matching_rule(event_label) else {
        return EventCode::Unknown;
    };

    match EVENT_RULES[index].outcome {
        RuleOutcome::Code(code) => code,
        RuleOutcome::FromDescription(keywords) => {
            let description = normalize(description);
            keywords
                .iter()
                .find(|(needle, _)| description.contains(needle))
                .map(|&(_, code)| code)
                .unwrap_or(EventCode::Unknown)
        }
    }
}

/// Classify the batted-ball shape of a plate appearance.
///
/// Fly/line/pop/ground outs carry their shape in the label itself. Force
/// outs, multi-out plays and hits take it from the narrative. Every other
/// outcome has no batted-ball code.
pub fn battedball_code(
    event_code: EventCode,
    event_label: &str,
    description: &str,
) -> Option<BattedBall> {
    let label = normalize(event_label);
    let label = label.as_str();

    if FLY_OUT_LABELS.contains(&label) {
        Some(BattedBall::FlyBall)
    } else if LINE_OUT_LABELS.contains(&label) {
        Some(BattedBall::LineDrive)
    } else if POP_OUT_LABELS.contains(&label) {
        Some(BattedBall::PopUp)
    } else if GROUND_OUT_LABELS.contains(&label) {
        Some(BattedBall::GroundBall)
    } else if OTHER_OUT_LABELS.contains(&label) || event_code.is_hit() {
        battedball_from_description(description)
    } else {
        None
    }
}

/// Scan a narrative for batted-ball keywords.
fn battedball_from_description(description: &str) -> Option<BattedBall> {
    let description = normalize(description);
    BATTED_BALL_KEYWORDS
        .iter()
        .find(|(needle, _)| description.contains(needle))
        .map(|&(_, shape)| shape)
}
