//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::TempDir;

use pitchpx::gameday::{parse_game_number, BoxScore, GameContext, HitChart, Node, Roster};
use pitchpx::{PlayByPlay, Reconstructor, Sentinels};

/// Game directory of the fixture game.
pub const GID: &str = "gid_2015_08_12_balmlb_seamlb_1";

/// Every document of one gameday game directory.
pub const DOCUMENTS: [&str; 5] = [
    "game.xml",
    "players.xml",
    "inning/inning_all.xml",
    "inning/inning_hit.xml",
    "boxscore.xml",
];

pub fn game_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2015, 8, 12).unwrap()
}

/// Get the path to the gameday fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("gameday")
}

/// Load a fixture document's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Directory of `gid` under a gd2 mirror rooted at `root`.
pub fn game_dir(root: &Path, date: NaiveDate, gid: &str) -> PathBuf {
    root.join(date.format("year_%Y").to_string())
        .join(date.format("month_%m").to_string())
        .join(date.format("day_%d").to_string())
        .join(gid)
}

/// Copy the listed fixture documents into `gid` of the mirror at `root`.
pub fn mirror_game(root: &Path, date: NaiveDate, gid: &str, documents: &[&str]) -> PathBuf {
    let dir = game_dir(root, date, gid);
    for name in documents {
        let path = dir.join(name);
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create game dir");
        fs::write(&path, load_fixture(name)).expect("Failed to write fixture");
    }
    dir
}

/// A temp mirror holding the complete fixture game.
pub fn fixture_mirror() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    mirror_game(temp.path(), game_date(), GID, &DOCUMENTS);
    temp
}

/// The fixture game's collaborators, parsed directly from the fixtures.
pub struct FixtureGame {
    pub game: GameContext,
    pub roster: Roster,
    pub hit_chart: HitChart,
    pub innings: Node,
    pub sentinels: Sentinels,
}

impl FixtureGame {
    pub fn load() -> Self {
        let sentinels = Sentinels::default();
        let number = parse_game_number(GID).unwrap();
        Self {
            game: GameContext::parse(&load_fixture("game.xml"), game_date(), number, &sentinels)
                .unwrap(),
            roster: Roster::parse(&load_fixture("players.xml"), &sentinels).unwrap(),
            hit_chart: HitChart::parse(&load_fixture("inning/inning_hit.xml")).unwrap(),
            innings: Node::parse(&load_fixture("inning/inning_all.xml")).unwrap(),
            sentinels,
        }
    }

    pub fn play_by_play(&self) -> PlayByPlay {
        Reconstructor::new(self.game.clone(), &self.roster, &self.hit_chart, &self.sentinels)
            .reconstruct(&self.innings)
    }

    pub fn boxscore(&self) -> BoxScore {
        BoxScore::parse(
            &load_fixture("boxscore.xml"),
            &self.game,
            &self.roster,
            &self.sentinels,
        )
        .unwrap()
    }
}

/// Index of `column` in a header row.
pub fn column(header: &[&str], column: &str) -> usize {
    header
        .iter()
        .position(|c| *c == column)
        .unwrap_or_else(|| panic!("no column {}", column))
}
