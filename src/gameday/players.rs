//! Roster lookup from `players.xml`.

use std::collections::HashMap;

use crate::config::Sentinels;

use super::error::GamedayError;
use super::xml::Node;

const DOCUMENT: &str = "players.xml";

/// A rostered player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: String,
    pub first: String,
    pub last: String,
    pub box_name: String,
    pub num: Option<u32>,
    /// Throwing hand.
    pub rl: String,
    pub bats: String,
    pub position: String,
    pub team_abbrev: String,
}

impl Player {
    fn from_node(node: &Node, team: &Node, sentinels: &Sentinels) -> Option<Self> {
        let id = node.attr("id").filter(|id| !id.is_empty())?;
        let full = sentinels.unknown_full.as_str();
        let short = sentinels.unknown_short.as_str();
        Some(Self {
            id: id.to_string(),
            first: node.attr_or("first", full).to_string(),
            last: node.attr_or("last", full).to_string(),
            box_name: node.attr_or("boxname", full).to_string(),
            num: node.parse_attr("num"),
            rl: node.attr_or("rl", short).to_string(),
            bats: node.attr_or("bats", short).to_string(),
            position: node.attr_or("position", full).to_string(),
            team_abbrev: node
                .attr("team_abbrev")
                .or_else(|| team.attr("id"))
                .unwrap_or(full)
                .to_string(),
        })
    }

    pub fn names(&self) -> PlayerNames {
        PlayerNames {
            first: self.first.clone(),
            last: self.last.clone(),
            box_name: self.box_name.clone(),
        }
    }
}

/// The three name fields written for every referenced player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerNames {
    pub first: String,
    pub last: String,
    pub box_name: String,
}

impl PlayerNames {
    /// Placeholder names for an id that is not on the roster.
    pub fn unknown(sentinels: &Sentinels) -> Self {
        Self {
            first: sentinels.unknown_full.clone(),
            last: sentinels.unknown_full.clone(),
            box_name: sentinels.unknown_full.clone(),
        }
    }
}

/// Both teams' players keyed by MLBAM id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    players: HashMap<String, Player>,
}

impl Roster {
    pub fn parse(xml: &str, sentinels: &Sentinels) -> Result<Self, GamedayError> {
        let root = Node::parse_document(DOCUMENT, xml)?;
        Ok(Self::from_node(&root, sentinels))
    }

    /// Index every `<player>` of every `<team>`. Coaches and umpires are ignored.
    pub fn from_node(root: &Node, sentinels: &Sentinels) -> Self {
        let players = root
            .find_all("team")
            .into_iter()
            .flat_map(|team| {
                team.children_named("player")
                    .filter_map(move |p| Player::from_node(p, team, sentinels))
            })
            .map(|p| (p.id.clone(), p))
            .collect();
        Self { players }
    }

    pub fn get(&self, id: &str) -> Option<&Player> {
        self.players.get(id)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.players.len()
    }

    pub fn insert(&mut self, player: Player) {
        self.players.insert(player.id.clone(), player);
    }
}
