//! Play-by-play reconstruction.
//!
//! Walks each half-inning of `inning_all.xml` in document order and builds
//! three ordered lists: one row per at-bat, one per pitch, one per action.
//!
//! # State
//!
//! - The out count is threaded across at-bats of one half-inning. It starts
//!   at 0 and becomes each at-bat's reported `o` for the next at-bat.
//! - The ball/strike tally and the pitch sequences are threaded across the
//!   pitches of one at-bat ([`PitchWalk`]).
//!
//! Nothing is shared between half-innings, so halves are never merged and a
//! short half-inning is passed through as-is.
//!
//! # Failure
//!
//! An at-bat without a usable number, batter or pitcher stops its
//! half-inning. Rows already assembled are kept and a [`Truncation`] is
//! recorded.

pub mod action;
pub mod atbat;
pub mod error;
pub mod pitch;

pub use action::{ActionRecord, ACTION_HEADER};
pub use atbat::{AtBatRecord, Participant, PlateAppearance, ATBAT_HEADER, PA_HEADER};
pub use error::SectionError;
pub use pitch::{PitchRecord, PitchStep, PitchWalk, PITCH_HEADER};

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::Sentinels;
use crate::gameday::{
    ActionNode, AtBatNode, GameContext, HitChart, HitLocation, Node, PlayerNames, Roster,
};

/// Top (away team bats) or bottom (home team bats) of an inning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Half {
    Top,
    Bottom,
}

impl Half {
    /// 0 when the away team bats, 1 when the home team bats.
    pub fn bat_home_id(self) -> u8 {
        match self {
            Half::Top => 0,
            Half::Bottom => 1,
        }
    }

    /// Element name of the half inside `<inning>`.
    pub fn element(self) -> &'static str {
        match self {
            Half::Top => "top",
            Half::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element())
    }
}

/// A half-inning that stopped early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncation {
    pub inning: u32,
    pub half: Half,
    /// Rows already emitted for the half-inning before it stopped.
    pub atbats_kept: usize,
    pub error: SectionError,
}

impl fmt::Display for Truncation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "inning {} {}: {} (kept {} at-bats)",
            self.inning, self.half, self.error, self.atbats_kept
        )
    }
}

/// Reconstructed rows of one game (or any number of games, via [`PlayByPlay::append`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayByPlay {
    pub atbats: Vec<AtBatRecord>,
    pub pitches: Vec<PitchRecord>,
    pub actions: Vec<ActionRecord>,
    pub truncations: Vec<Truncation>,
}

impl PlayByPlay {
    pub fn is_empty(&self) -> bool {
        self.atbats.is_empty() && self.pitches.is_empty() && self.actions.is_empty()
    }

    /// Move every row of `other` to the end of `self`, keeping order.
    pub fn append(&mut self, mut other: PlayByPlay) {
        self.atbats.append(&mut other.atbats);
        self.pitches.append(&mut other.pitches);
        self.actions.append(&mut other.actions);
        self.truncations.append(&mut other.truncations);
    }
}

/// Reconstructs one game's play-by-play from its collaborators.
pub struct Reconstructor<'a> {
    game: Arc<GameContext>,
    roster: &'a Roster,
    hit_chart: &'a HitChart,
    sentinels: &'a Sentinels,
}

impl<'a> Reconstructor<'a> {
    pub fn new(
        game: GameContext,
        roster: &'a Roster,
        hit_chart: &'a HitChart,
        sentinels: &'a Sentinels,
    ) -> Self {
        Self {
            game: Arc::new(game),
            roster,
            hit_chart,
            sentinels,
        }
    }

    pub fn game(&self) -> &Arc<GameContext> {
        &self.game
    }

    /// Names for `id`, or placeholders when the roster does not know it.
    pub fn player_names(&self, id: &str, role: &'static str) -> PlayerNames {
        match self.roster.get(id) {
            Some(player) => player.names(),
            None => {
                warn!(
                    game = %self.game.retro_game_id,
                    player = id,
                    role,
                    "player not on roster, using placeholder names"
                );
                PlayerNames::unknown(self.sentinels)
            }
        }
    }

    pub fn hit_location(&self, inning: u32, pitcher: &str, batter: &str) -> Option<HitLocation> {
        self.hit_chart.location(inning, pitcher, batter)
    }

    /// Reconstruct every inning under `root`.
    ///
    /// `root` is either the `<game>` element of `inning_all.xml` or a single
    /// `<inning>`. An inning without a usable `num` takes its 1-based
    /// position in the document.
    pub fn reconstruct(&self, root: &Node) -> PlayByPlay {
        let innings: Vec<&Node> = if root.name == "inning" {
            vec![root]
        } else {
            root.children_named("inning").collect()
        };

        let mut pbp = PlayByPlay::default();
        for (position, inning) in innings.into_iter().enumerate() {
            let number = inning.parse_attr("num").unwrap_or(position as u32 + 1);
            for half in [Half::Top, Half::Bottom] {
                if let Some(section) = inning.child(half.element()) {
                    if let Err(truncation) = self.half_inning(section, number, half, &mut pbp) {
                        warn!(
                            game = %self.game.retro_game_id,
                            inning = truncation.inning,
                            half = %truncation.half,
                            error = %truncation.error,
                            "half-inning truncated"
                        );
                        pbp.truncations.push(truncation);
                    }
                }
            }
        }

        debug!(
            game = %self.game.retro_game_id,
            atbats = pbp.atbats.len(),
            pitches = pbp.pitches.len(),
            actions = pbp.actions.len(),
            "reconstructed game"
        );
        pbp
    }

    /// Walk one `<top>` or `<bottom>` in document order, appending to `pbp`.
    pub fn half_inning(
        &self,
        section: &Node,
        inning: u32,
        half: Half,
        pbp: &mut PlayByPlay,
    ) -> Result<(), Truncation> {
        let mut outs_before = Some(0);
        let mut atbats_kept = 0;

        for child in &section.children {
            match child.name.as_str() {
                "atbat" => {
                    let node = AtBatNode::from_node(child, self.sentinels).map_err(|error| {
                        Truncation {
                            inning,
                            half,
                            atbats_kept,
                            error,
                        }
                    })?;
                    let (atbat, pitches) = self.plate_appearance(&node, inning, half, outs_before);
                    outs_before = node.outs;
                    pbp.atbats.push(atbat);
                    pbp.pitches.extend(pitches);
                    atbats_kept += 1;
                }
                "action" => {
                    let node = ActionNode::from_node(child, self.sentinels);
                    pbp.actions.push(self.action(node, inning, half));
                }
                _ => {}
            }
        }
        Ok(())
    }
}
