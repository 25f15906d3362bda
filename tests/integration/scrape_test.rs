//! End-to-end scraping from a local gd2 mirror

use std::fs;
use std::path::Path;

use pitchpx::gameday::LocalMirror;
use pitchpx::output::Record;
use pitchpx::pbp::AtBatRecord;
use pitchpx::scrape::output_file;
use pitchpx::{DayRange, Scraper, Sentinels};
use tempfile::TempDir;

use crate::helpers::{fixture_mirror, game_date, mirror_game};

fn read_csv(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let header = reader.headers().unwrap().iter().map(String::from).collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect();
    (header, rows)
}

#[test]
fn scrapes_a_day_into_four_files() {
    let mirror = fixture_mirror();
    let out = TempDir::new().unwrap();
    let scraper = Scraper::new(
        LocalMirror::new(mirror.path()),
        out.path(),
        2,
        Sentinels::default(),
    );

    let summaries = scraper.run(&DayRange::parse("20150812", "20150812").unwrap()).unwrap();
    assert_eq!(summaries.len(), 1);
    let day = &summaries[0];
    assert_eq!(day.games, 1);
    assert_eq!(day.skipped, 0);
    assert_eq!((day.atbats, day.pitches, day.actions), (6, 16, 2));
    assert_eq!(day.files.len(), 4);

    let (header, rows) = read_csv(&output_file(out.path(), "atbat", game_date()));
    assert_eq!(header, AtBatRecord::header());
    assert_eq!(rows.len(), 6);
    let end_bases = header.iter().position(|c| c == "end_bases").unwrap();
    assert_eq!(rows[4][end_bases], "_2_");

    let (_, pitches) = read_csv(&output_file(out.path(), "pitch", game_date()));
    assert_eq!(pitches.len(), 16);

    let (header, boxscores) = read_csv(&output_file(out.path(), "boxscore", game_date()));
    assert_eq!(header.len(), 61);
    assert_eq!(boxscores.len(), 1);
}

#[test]
fn days_without_games_write_nothing() {
    let mirror = fixture_mirror();
    let out = TempDir::new().unwrap();
    let scraper = Scraper::new(
        LocalMirror::new(mirror.path()),
        out.path(),
        4,
        Sentinels::default(),
    );

    let summaries = scraper.run(&DayRange::parse("20150810", "20150813").unwrap()).unwrap();
    let dates: Vec<String> = summaries
        .iter()
        .map(|s| s.date.format("%Y%m%d").to_string())
        .collect();
    assert_eq!(dates, vec!["20150810", "20150811", "20150812", "20150813"]);

    let games: Vec<usize> = summaries.iter().map(|s| s.games).collect();
    assert_eq!(games, vec![0, 0, 1, 0]);
    assert!(summaries[0].files.is_empty());
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 4);
}

#[test]
fn incomplete_games_are_skipped() {
    let mirror = fixture_mirror();
    mirror_game(
        mirror.path(),
        game_date(),
        "gid_2015_08_12_nyamlb_bosmlb_1",
        &["game.xml", "players.xml"],
    );
    let out = TempDir::new().unwrap();
    let scraper = Scraper::new(
        LocalMirror::new(mirror.path()),
        out.path(),
        1,
        Sentinels::default(),
    );

    let day = scraper.reconstruct_day(game_date()).unwrap();
    assert_eq!(day.games, 1);
    assert_eq!(day.skipped, vec!["gid_2015_08_12_nyamlb_bosmlb_1".to_string()]);
    assert_eq!(day.pbp.atbats.len(), 6);
}

#[test]
fn optional_documents_may_be_missing() {
    let mirror = TempDir::new().unwrap();
    mirror_game(
        mirror.path(),
        game_date(),
        crate::helpers::GID,
        &["game.xml", "players.xml", "inning/inning_all.xml"],
    );
    let out = TempDir::new().unwrap();
    let scraper = Scraper::new(
        LocalMirror::new(mirror.path()),
        out.path(),
        1,
        Sentinels::default(),
    );

    let game = scraper.game(game_date(), crate::helpers::GID).unwrap();
    assert!(game.boxscore.is_none());
    assert_eq!(game.pbp.atbats.len(), 6);
    assert!(game.pbp.atbats.iter().all(|ab| ab.hit.is_none()));
}
