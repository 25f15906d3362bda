//! Administrative actions (substitutions, pickoff attempts, wild pitches...).

use std::sync::Arc;

use crate::gameday::{ActionNode, GameContext, PlayerNames, GAME_HEADER};
use crate::output::{number, Record};

use super::{Half, Reconstructor};

/// Action columns, after the game columns.
pub const ACTION_HEADER: [&str; 15] = [
    "inning_number",
    "bat_home_id",
    "ball_ct",
    "strike_ct",
    "outs_ct",
    "des",
    "event",
    "player_mlbid",
    "player_first_name",
    "player_last_name",
    "player_box_name",
    "pitch",
    "event_num",
    "home_team_runs",
    "away_team_runs",
];

/// One action, with the count and score as the feed reported them.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionRecord {
    pub game: Arc<GameContext>,
    pub inning_number: u32,
    pub half: Half,
    pub player: PlayerNames,
    pub node: ActionNode,
}

impl Record for ActionRecord {
    fn header() -> Vec<&'static str> {
        [&GAME_HEADER[..], &ACTION_HEADER[..]].concat()
    }

    fn values(&self) -> Vec<String> {
        let node = &self.node;
        let mut values = self.game.values();
        values.extend([
            self.inning_number.to_string(),
            self.half.bat_home_id().to_string(),
            number(node.balls),
            number(node.strikes),
            number(node.outs),
            node.des.clone(),
            node.event.clone(),
            node.player.clone(),
            self.player.first.clone(),
            self.player.last.clone(),
            self.player.box_name.clone(),
            number(node.pitch),
            number(node.event_num),
            number(node.home_team_runs),
            number(node.away_team_runs),
        ]);
        values
    }
}

impl Reconstructor<'_> {
    /// Map one action. Independent of at-bat and pitch state.
    pub fn action(&self, node: ActionNode, inning: u32, half: Half) -> ActionRecord {
        ActionRecord {
            game: Arc::clone(self.game()),
            inning_number: inning,
            half,
            player: self.player_names(&node.player, "action player"),
            node,
        }
    }
}
