//! Game context from `game.xml`.

use chrono::{Datelike, NaiveDate};

use crate::config::Sentinels;
use crate::output::flag;

use super::error::GamedayError;
use super::xml::Node;

/// Columns shared by every per-game row, in output order.
pub const GAME_HEADER: [&str; 19] = [
    "retro_game_id",
    "year",
    "month",
    "day",
    "st_fl",
    "regseason_fl",
    "playoff_fl",
    "game_type",
    "game_type_des",
    "local_game_time",
    "game_id",
    "home_team_id",
    "away_team_id",
    "home_team_lg",
    "away_team_lg",
    "interleague_fl",
    "park_id",
    "park_name",
    "park_location",
];

const DOCUMENT: &str = "game.xml";

/// Game, team and park metadata copied into every row of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameContext {
    pub retro_game_id: String,
    pub date: NaiveDate,
    pub game_type: String,
    pub game_type_des: String,
    pub local_game_time: String,
    pub game_id: String,
    pub home_team_id: String,
    pub away_team_id: String,
    pub home_team_lg: String,
    pub away_team_lg: String,
    pub park_id: String,
    pub park_name: String,
    pub park_location: String,
}

impl GameContext {
    /// Parse `game.xml` for the game played on `date` as game `game_number`
    /// of the day (1 for a single game, 2 for the second of a doubleheader).
    pub fn parse(
        xml: &str,
        date: NaiveDate,
        game_number: u32,
        sentinels: &Sentinels,
    ) -> Result<Self, GamedayError> {
        let root = Node::parse_document(DOCUMENT, xml)?;
        Self::from_node(&root, date, game_number, sentinels)
    }

    pub fn from_node(
        root: &Node,
        date: NaiveDate,
        game_number: u32,
        sentinels: &Sentinels,
    ) -> Result<Self, GamedayError> {
        let unknown = sentinels.unknown_full.as_str();
        let team = |side: &str| {
            root.children_named("team")
                .find(|t| t.attr("type") == Some(side))
                .ok_or_else(|| GamedayError::MissingElement {
                    document: DOCUMENT.to_string(),
                    element: format!("team type=\"{}\"", side),
                })
        };
        let home = team("home")?;
        let away = team("away")?;
        let home_code = home.attr_or("code", unknown).to_lowercase();
        let away_code = away.attr_or("code", unknown).to_lowercase();

        let game_type = root
            .attr("type")
            .unwrap_or(sentinels.unknown_short.as_str())
            .to_string();
        let stadium = root.child("stadium");
        let park = |key: &str| {
            stadium
                .and_then(|s| s.attr(key))
                .unwrap_or(unknown)
                .to_string()
        };

        Ok(Self {
            retro_game_id: retro_game_id(&home_code, date, game_number),
            date,
            game_type_des: game_type_description(&game_type, sentinels),
            game_type,
            local_game_time: root.attr_or("local_game_time", unknown).to_string(),
            game_id: root.attr_or("game_pk", unknown).to_string(),
            home_team_lg: home.attr_or("league", unknown).to_string(),
            away_team_lg: away.attr_or("league", unknown).to_string(),
            home_team_id: home_code,
            away_team_id: away_code,
            park_id: park("id"),
            park_name: park("name"),
            park_location: park("location"),
        })
    }

    pub fn is_spring_training(&self) -> bool {
        self.game_type == "S"
    }

    pub fn is_regular_season(&self) -> bool {
        self.game_type == "R"
    }

    pub fn is_playoff(&self) -> bool {
        matches!(self.game_type.as_str(), "F" | "D" | "L" | "W")
    }

    pub fn is_interleague(&self) -> bool {
        self.home_team_lg != self.away_team_lg
    }

    /// Cells for [`GAME_HEADER`].
    pub fn values(&self) -> Vec<String> {
        vec![
            self.retro_game_id.clone(),
            self.date.year().to_string(),
            self.date.month().to_string(),
            self.date.day().to_string(),
            flag(self.is_spring_training()),
            flag(self.is_regular_season()),
            flag(self.is_playoff()),
            self.game_type.clone(),
            self.game_type_des.clone(),
            self.local_game_time.clone(),
            self.game_id.clone(),
            self.home_team_id.clone(),
            self.away_team_id.clone(),
            self.home_team_lg.clone(),
            self.away_team_lg.clone(),
            flag(self.is_interleague()),
            self.park_id.clone(),
            self.park_name.clone(),
            self.park_location.clone(),
        ]
    }
}

/// Retrosheet-style game id: home code, date, and game number minus one
/// (`SEA201508120`).
pub fn retro_game_id(home_code: &str, date: NaiveDate, game_number: u32) -> String {
    format!(
        "{}{}{}",
        home_code.to_uppercase(),
        date.format("%Y%m%d"),
        game_number.saturating_sub(1)
    )
}

/// Description of a one-letter game type code.
pub fn game_type_description(game_type: &str, sentinels: &Sentinels) -> String {
    match game_type {
        "S" => "Spring Training",
        "R" => "Regular Season",
        "F" => "Wild-card Game",
        "D" => "Divisional Series",
        "L" => "LCS",
        "W" => "World Series",
        _ => sentinels.unknown_full.as_str(),
    }
    .to_string()
}

/// Game number from a game directory name such as
/// `gid_2015_08_12_balmlb_seamlb_1`.
pub fn parse_game_number(gid: &str) -> Result<u32, GamedayError> {
    let name = gid.trim_end_matches('/');
    let invalid = || GamedayError::InvalidGameId(gid.to_string());
    if !name.starts_with("gid_") {
        return Err(invalid());
    }
    let number: u32 = name
        .rsplit('_')
        .next()
        .and_then(|n| n.parse().ok())
        .ok_or_else(invalid)?;
    if number == 0 {
        return Err(invalid());
    }
    Ok(number)
}
