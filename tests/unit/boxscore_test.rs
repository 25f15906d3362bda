//! Box score row of the fixture game

use pitchpx::gameday::BOXSCORE_HEADER;
use pitchpx::output::Record;

use crate::helpers::{column, FixtureGame};

#[test]
fn starting_lineups_fill_numbered_slots() {
    let boxscore = FixtureGame::load().boxscore();
    let row = boxscore.values();
    assert_eq!(row.len(), 61);

    let cell = |name: &str| row[column(&BOXSCORE_HEADER, name)].as_str();
    assert_eq!(cell("retro_game_id"), "SEA201508120");
    assert_eq!(cell("home_team_id"), "sea");
    assert_eq!(cell("away_team_id"), "bal");
    assert_eq!(cell("home_lineup_1_id"), "452234");
    assert_eq!(cell("home_lineup_1_name"), "Smith, S");
    assert_eq!(cell("home_lineup_3_name"), "Seager, K");
    assert_eq!(cell("home_lineup_3_pos"), "3B");
    assert_eq!(cell("away_lineup_2_name"), "Parra, G");
}

#[test]
fn empty_slots_render_placeholders() {
    let boxscore = FixtureGame::load().boxscore();
    let row = boxscore.values();
    let cell = |name: &str| row[column(&BOXSCORE_HEADER, name)].as_str();
    for name in ["home_lineup_4_id", "home_lineup_9_name", "away_lineup_4_pos"] {
        assert_eq!(cell(name), "Unknown", "{}", name);
    }
}

#[test]
fn substitutes_appear_only_in_batter_json() {
    let boxscore = FixtureGame::load().boxscore();
    let row = boxscore.values();
    let batters: serde_json::Value =
        serde_json::from_str(&row[column(&BOXSCORE_HEADER, "home_batter")]).unwrap();
    let batters = batters.as_array().unwrap();
    assert_eq!(batters.len(), 4);

    let sub = &batters[3];
    assert_eq!(sub["id"], "999999");
    assert_eq!(sub["bo"], "3");
    assert_eq!(sub["starting"], false);
    assert_eq!(sub["box_name"], "Sub");
    assert_eq!(sub["first"], "Unknown");

    let pitchers: serde_json::Value =
        serde_json::from_str(&row[column(&BOXSCORE_HEADER, "away_pitcher")]).unwrap();
    assert_eq!(pitchers[0]["last"], "Gausman");
    assert_eq!(pitchers[0]["out"], "18");
}
