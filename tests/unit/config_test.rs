//! Unit tests for config loading

use std::fs;

use pitchpx::{Config, Sentinels};
use tempfile::TempDir;

#[test]
fn missing_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn file_values_override_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r#"
[source]
root = "/data/gd2"

[scrape]
workers = 2

[sentinels]
unknown_full = "N/A"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.source.root, "/data/gd2");
    assert_eq!(config.scrape.workers, 2);
    assert_eq!(config.sentinels.unknown_full, "N/A");
    assert_eq!(config.sentinels.unknown_short, Sentinels::default().unknown_short);
    assert_eq!(config.output.directory, ".");
}

#[test]
fn invalid_values_are_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[scrape]\nworkers = 0\n").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid config"));
}

#[test]
fn unparseable_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[scrape\n").unwrap();
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn save_then_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.toml");
    let mut config = Config::default();
    config.log.json = true;
    config.save_to(&path).unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), config);
}
