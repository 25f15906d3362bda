//! Typed views over play-by-play elements.
//!
//! Extraction happens once, here: absent text attributes become the
//! configured placeholders and absent numbers become `None`, so the
//! assemblers never see a raw attribute map.

use crate::config::Sentinels;
use crate::pbp::SectionError;

use super::xml::Node;

/// Trajectory attributes copied 1:1 from each `<pitch>`, in output order.
pub const TRAJECTORY_KEYS: [&str; 22] = [
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
];

/// Non-empty attribute value.
fn present<'a>(node: &'a Node, key: &str) -> Option<&'a str> {
    node.attr(key).filter(|v| !v.trim().is_empty())
}

fn text_or(node: &Node, key: &str, placeholder: &str) -> String {
    present(node, key).unwrap_or(placeholder).to_string()
}

fn required<'a>(
    node: &'a Node,
    element: &'static str,
    attribute: &'static str,
) -> Result<&'a str, SectionError> {
    present(node, attribute).ok_or(SectionError::MissingAttribute { element, attribute })
}

/// One `<pitch>` inside an at-bat.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchNode {
    /// One-character result code (`type` attribute).
    pub result: String,
    pub des: String,
    pub id: Option<u32>,
    pub trajectory: [Option<f64>; 22],
    pub pitch_type: String,
    pub type_confidence: Option<f64>,
    pub zone: Option<u32>,
    pub spin_dir: Option<f64>,
    pub spin_rate: Option<f64>,
    pub sv_id: String,
}

impl PitchNode {
    pub fn from_node(node: &Node, sentinels: &Sentinels) -> Self {
        Self {
            result: text_or(node, "type", &sentinels.unknown_short),
            des: text_or(node, "des", &sentinels.unknown_full),
            id: node.parse_attr("id"),
            trajectory: TRAJECTORY_KEYS.map(|key| node.parse_attr(key)),
            pitch_type: text_or(node, "pitch_type", &sentinels.unknown_short),
            type_confidence: node.parse_attr("type_confidence"),
            zone: node.parse_attr("zone"),
            spin_dir: node.parse_attr("spin_dir"),
            spin_rate: node.parse_attr("spin_rate"),
            sv_id: text_or(node, "sv_id", &sentinels.unknown_full),
        }
    }
}

/// One `<runner>` movement inside an at-bat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerNode {
    pub id: String,
    /// Base label before the play (`"1B"`...), empty for the batter.
    pub start: String,
    /// Base label after the play, empty when the runner scored or was retired.
    pub end: String,
}

impl RunnerNode {
    pub fn from_node(node: &Node) -> Self {
        Self {
            id: node.attr_or("id", "").to_string(),
            start: node.attr_or("start", "").trim().to_string(),
            end: node.attr_or("end", "").trim().to_string(),
        }
    }
}

/// One `<atbat>` with its pitches and runner movements.
#[derive(Debug, Clone, PartialEq)]
pub struct AtBatNode {
    pub num: u32,
    pub balls: Option<u8>,
    pub strikes: Option<u8>,
    /// Outs in the half-inning once this play is over.
    pub outs: Option<u8>,
    pub batter: String,
    pub stand: String,
    pub pitcher: String,
    pub p_throws: String,
    pub des: String,
    pub event: String,
    pub pitches: Vec<PitchNode>,
    pub runners: Vec<RunnerNode>,
}

impl AtBatNode {
    /// Extract an at-bat.
    ///
    /// Fails when the at-bat number, batter or pitcher is missing or the
    /// number is not an integer; these are the attributes a row cannot be
    /// keyed without.
    pub fn from_node(node: &Node, sentinels: &Sentinels) -> Result<Self, SectionError> {
        let raw_num = required(node, "atbat", "num")?;
        let num = raw_num
            .trim()
            .parse()
            .map_err(|_| SectionError::InvalidAttribute {
                element: "atbat",
                attribute: "num",
                value: raw_num.to_string(),
            })?;

        Ok(Self {
            num,
            balls: node.parse_attr("b"),
            strikes: node.parse_attr("s"),
            outs: node.parse_attr("o"),
            batter: required(node, "atbat", "batter")?.to_string(),
            stand: text_or(node, "stand", &sentinels.unknown_short),
            pitcher: required(node, "atbat", "pitcher")?.to_string(),
            p_throws: text_or(node, "p_throws", &sentinels.unknown_short),
            des: text_or(node, "des", &sentinels.unknown_full),
            event: text_or(node, "event", &sentinels.unknown_full),
            pitches: node
                .children_named("pitch")
                .map(|p| PitchNode::from_node(p, sentinels))
                .collect(),
            runners: node.children_named("runner").map(RunnerNode::from_node).collect(),
        })
    }

    /// Runner movements as `(start, end)` label pairs.
    pub fn movements(&self) -> impl Iterator<Item = (&str, &str)> {
        self.runners.iter().map(|r| (r.start.as_str(), r.end.as_str()))
    }
}

/// One administrative `<action>` (substitution, pickoff attempt, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct ActionNode {
    pub balls: Option<u8>,
    pub strikes: Option<u8>,
    pub outs: Option<u8>,
    pub des: String,
    pub event: String,
    pub player: String,
    pub pitch: Option<u32>,
    pub event_num: Option<u32>,
    pub home_team_runs: Option<u32>,
    pub away_team_runs: Option<u32>,
}

impl ActionNode {
    pub fn from_node(node: &Node, sentinels: &Sentinels) -> Self {
        Self {
            balls: node.parse_attr("b"),
            strikes: node.parse_attr("s"),
            outs: node.parse_attr("o"),
            des: text_or(node, "des", &sentinels.unknown_full),
            event: text_or(node, "event", &sentinels.unknown_full),
            player: text_or(node, "player", &sentinels.unknown_full),
            pitch: node.parse_attr("pitch"),
            event_num: node.parse_attr("event_num"),
            home_team_runs: node.parse_attr("home_team_runs"),
            away_team_runs: node.parse_attr("away_team_runs"),
        }
    }
}
