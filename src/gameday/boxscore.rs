//! Box score row from `boxscore.xml`.
//!
//! One row per game: the starting lineup of each side flattened into
//! numbered columns, plus every batter and pitcher who appeared as a JSON
//! array.

use serde::Serialize;

use crate::config::Sentinels;
use crate::output::Record;

use super::error::GamedayError;
use super::game::GameContext;
use super::players::Roster;
use super::xml::Node;

/// Column names, home side first.
pub const BOXSCORE_HEADER: [&str; 61] = [
    "retro_game_id",
    "home_team_id",
    "away_team_id",
    "home_lineup_1_id",
    "home_lineup_1_name",
    "home_lineup_1_pos",
    "home_lineup_2_id",
    "home_lineup_2_name",
    "home_lineup_2_pos",
    "home_lineup_3_id",
    "home_lineup_3_name",
    "home_lineup_3_pos",
    "home_lineup_4_id",
    "home_lineup_4_name",
    "home_lineup_4_pos",
    "home_lineup_5_id",
    "home_lineup_5_name",
    "home_lineup_5_pos",
    "home_lineup_6_id",
    "home_lineup_6_name",
    "home_lineup_6_pos",
    "home_lineup_7_id",
    "home_lineup_7_name",
    "home_lineup_7_pos",
    "home_lineup_8_id",
    "home_lineup_8_name",
    "home_lineup_8_pos",
    "home_lineup_9_id",
    "home_lineup_9_name",
    "home_lineup_9_pos",
    "home_batter",
    "home_pitcher",
    "away_lineup_1_id",
    "away_lineup_1_name",
    "away_lineup_1_pos",
    "away_lineup_2_id",
    "away_lineup_2_name",
    "away_lineup_2_pos",
    "away_lineup_3_id",
    "away_lineup_3_name",
    "away_lineup_3_pos",
    "away_lineup_4_id",
    "away_lineup_4_name",
    "away_lineup_4_pos",
    "away_lineup_5_id",
    "away_lineup_5_name",
    "away_lineup_5_pos",
    "away_lineup_6_id",
    "away_lineup_6_name",
    "away_lineup_6_pos",
    "away_lineup_7_id",
    "away_lineup_7_name",
    "away_lineup_7_pos",
    "away_lineup_8_id",
    "away_lineup_8_name",
    "away_lineup_8_pos",
    "away_lineup_9_id",
    "away_lineup_9_name",
    "away_lineup_9_pos",
    "away_batter",
    "away_pitcher",
];

const LINEUP_SLOTS: u8 = 9;

/// Batting order slot and starter flag from a `bo` attribute.
///
/// `bo` is three characters: the order slot followed by a two-digit
/// substitution index where `00` marks the starter (`"100"` bats first and
/// started, `"201"` is the first substitute in the second slot). Anything
/// else, including `"000"`, has no slot.
pub fn batting_order(bo: Option<&str>) -> (Option<String>, bool) {
    match bo {
        Some(bo) if bo.chars().count() == 3 && bo != "000" => {
            let mut chars = bo.chars();
            let slot = chars.next().map(String::from);
            let starter = chars.as_str() == "00";
            (slot, starter)
        }
        _ => (None, false),
    }
}

/// A batter who appeared in the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoxBatter {
    pub bo: Option<String>,
    pub pos: String,
    pub id: String,
    pub first: String,
    pub last: String,
    pub box_name: String,
    pub rl: String,
    pub bats: String,
    pub starting: bool,
}

/// A pitcher who appeared in the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoxPitcher {
    pub pos: String,
    pub id: String,
    pub first: String,
    pub last: String,
    pub box_name: String,
    pub rl: String,
    pub bats: String,
    /// Outs recorded.
    pub out: Option<String>,
    /// Batters faced.
    pub bf: Option<String>,
}

/// Profile fields shared by batters and pitchers: roster first, box score
/// attributes as fallback.
struct Profile {
    id: String,
    first: String,
    last: String,
    box_name: String,
    rl: String,
    bats: String,
}

impl Profile {
    fn resolve(node: &Node, roster: &Roster, sentinels: &Sentinels) -> Self {
        let id = node.attr_or("id", &sentinels.unknown_full).to_string();
        match roster.get(&id) {
            Some(player) => Self {
                first: player.first.clone(),
                last: player.last.clone(),
                box_name: player.box_name.clone(),
                rl: player.rl.clone(),
                bats: player.bats.clone(),
                id,
            },
            None => Self {
                first: sentinels.unknown_full.clone(),
                last: sentinels.unknown_full.clone(),
                box_name: node.attr_or("name", &sentinels.unknown_full).to_string(),
                rl: sentinels.unknown_short.clone(),
                bats: sentinels.unknown_short.clone(),
                id,
            },
        }
    }
}

/// One side's batters and pitchers, in box score order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamBox {
    pub batters: Vec<BoxBatter>,
    pub pitchers: Vec<BoxPitcher>,
}

impl TeamBox {
    fn from_node(root: &Node, flag: &str, roster: &Roster, sentinels: &Sentinels) -> Self {
        let section = |name: &str| {
            root.find_all(name)
                .into_iter()
                .find(|n| n.attr("team_flag") == Some(flag))
        };

        let batters = section("batting")
            .map(|batting| {
                batting
                    .children_named("batter")
                    .map(|b| {
                        let profile = Profile::resolve(b, roster, sentinels);
                        let (bo, starting) = batting_order(b.attr("bo"));
                        BoxBatter {
                            bo,
                            pos: b.attr_or("pos", &sentinels.unknown_short).to_string(),
                            id: profile.id,
                            first: profile.first,
                            last: profile.last,
                            box_name: profile.box_name,
                            rl: profile.rl,
                            bats: profile.bats,
                            starting,
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        let pitchers = section("pitching")
            .map(|pitching| {
                pitching
                    .children_named("pitcher")
                    .map(|p| {
                        let profile = Profile::resolve(p, roster, sentinels);
                        BoxPitcher {
                            pos: p.attr_or("pos", &sentinels.unknown_short).to_string(),
                            id: profile.id,
                            first: profile.first,
                            last: profile.last,
                            box_name: profile.box_name,
                            rl: profile.rl,
                            bats: profile.bats,
                            out: p.attr("out").map(String::from),
                            bf: p.attr("bf").map(String::from),
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self { batters, pitchers }
    }

    /// The starter batting in `slot` (1-9).
    pub fn starter(&self, slot: u8) -> Option<&BoxBatter> {
        let slot = slot.to_string();
        self.batters
            .iter()
            .find(|b| b.starting && b.bo.as_deref() == Some(slot.as_str()))
    }
}

/// Box score for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxScore {
    pub retro_game_id: String,
    pub home_team_id: String,
    pub away_team_id: String,
    pub home: TeamBox,
    pub away: TeamBox,
    unknown: String,
}

impl BoxScore {
    pub fn parse(
        xml: &str,
        game: &GameContext,
        roster: &Roster,
        sentinels: &Sentinels,
    ) -> Result<Self, GamedayError> {
        let root = Node::parse_document("boxscore.xml", xml)?;
        Ok(Self::from_node(&root, game, roster, sentinels))
    }

    pub fn from_node(root: &Node, game: &GameContext, roster: &Roster, sentinels: &Sentinels) -> Self {
        Self {
            retro_game_id: game.retro_game_id.clone(),
            home_team_id: game.home_team_id.clone(),
            away_team_id: game.away_team_id.clone(),
            home: TeamBox::from_node(root, "home", roster, sentinels),
            away: TeamBox::from_node(root, "away", roster, sentinels),
            unknown: sentinels.unknown_full.clone(),
        }
    }

    fn side_values(&self, side: &TeamBox, values: &mut Vec<String>) {
        for slot in 1..=LINEUP_SLOTS {
            match side.starter(slot) {
                Some(b) => values.extend([b.id.clone(), b.box_name.clone(), b.pos.clone()]),
                None => values.extend(std::iter::repeat(self.unknown.clone()).take(3)),
            }
        }
        values.push(json_array(&side.batters));
        values.push(json_array(&side.pitchers));
    }
}

fn json_array<T: Serialize>(items: &[T]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

impl Record for BoxScore {
    fn header() -> Vec<&'static str> {
        BOXSCORE_HEADER.to_vec()
    }

    fn values(&self) -> Vec<String> {
        let mut values = vec![
            self.retro_game_id.clone(),
            self.home_team_id.clone(),
            self.away_team_id.clone(),
        ];
        self.side_values(&self.home, &mut values);
        self.side_values(&self.away, &mut values);
        values
    }
}
