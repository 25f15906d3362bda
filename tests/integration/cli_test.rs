//! pitchpx binary tests
//!
//! HOME points at a temp dir so no user configuration leaks in.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{fixture_mirror, game_date};

fn pitchpx(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pitchpx"));
    cmd.env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn classify_prints_codes() {
    let home = TempDir::new().unwrap();
    let stdout = stdout_of(pitchpx(&home).args([
        "classify",
        "Double",
        "Kyle Seager doubles (26) on a line drive to right fielder Gerardo Parra.",
    ]));
    insta::assert_snapshot!(stdout.trim_end(), @r"
    event_cd: 21
    battedball_cd: L
    ");
}

#[test]
fn classify_runner_out_without_description() {
    let home = TempDir::new().unwrap();
    let stdout = stdout_of(pitchpx(&home).args(["classify", "Runner Out"]));
    insta::assert_snapshot!(stdout.trim_end(), @r"
    event_cd: 0
    battedball_cd: -
    ");
}

#[test]
fn scrape_reports_each_day() {
    let home = TempDir::new().unwrap();
    let mirror = fixture_mirror();
    let out = home.path().join("out");

    let stdout = stdout_of(pitchpx(&home).args([
        "scrape",
        "--start",
        "20150811",
        "--end",
        "20150812",
        "--source",
        mirror.path().to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
        "--workers",
        "2",
    ]));
    insta::assert_snapshot!(stdout.trim_end(), @r"
    20150811  games 0  at-bats 0  pitches 0  actions 0
    20150812  games 1  at-bats 6  pitches 16  actions 2
    ");

    let written = out.join(format!("mlbam_atbat_{}.csv", game_date().format("%Y%m%d")));
    assert!(written.exists());
}

#[test]
fn scrape_rejects_reversed_range() {
    let home = TempDir::new().unwrap();
    pitchpx(&home)
        .args(["scrape", "--start", "20150813", "--end", "20150812"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "start date 2015-08-13 is after end date 2015-08-12",
        ));
}

#[test]
fn scrape_rejects_malformed_day() {
    let home = TempDir::new().unwrap();
    pitchpx(&home)
        .args(["scrape", "--start", "2015-08-12", "--end", "20150812"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be 8 digits"));
}

#[test]
fn config_path_follows_flag() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("custom.toml");
    pitchpx(&home)
        .args(["config", "path", "--config", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(format!("{}\n", path.display()));
}

#[test]
fn config_path_defaults_under_home() {
    let home = TempDir::new().unwrap();
    let expected = home.path().join(".config").join("pitchpx").join("config.toml");
    pitchpx(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(format!("{}\n", expected.display()));
}

#[test]
fn config_show_merges_file_with_defaults() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("config.toml");
    fs::write(&path, "[scrape]\nworkers = 3\n").unwrap();

    let stdout = stdout_of(pitchpx(&home).args(["--config", path.to_str().unwrap(), "config", "show"]));
    assert!(stdout.contains("workers = 3"));
    assert!(stdout.contains("unknown_full = \"Unknown\""));
    assert!(stdout.contains("[log]"));
}

#[test]
fn invalid_config_fails_to_start() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("config.toml");
    fs::write(&path, "[scrape]\nworkers = 0\n").unwrap();
    pitchpx(&home)
        .args(["--config", path.to_str().unwrap(), "config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn version_starts_with_package_version() {
    let home = TempDir::new().unwrap();
    pitchpx(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "pitchpx {}",
            env!("CARGO_PKG_VERSION")
        )));
}
