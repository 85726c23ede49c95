use std::fs;

use cricstats_cli::config::{AppConfig, ConfigError};
use cricstats_cli::export::{export_matches, export_players};
use cricstats_query::Dataset;
use tempfile::TempDir;

#[test]
fn explicit_config_file_is_loaded() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("cricstats.toml");
    fs::write(
        &path,
        "[data]\nplayers = \"odi.csv\"\nmatches = \"wc.csv\"\n\n[query]\ntop_n = 5\n",
    )
    .expect("write config");

    let config = AppConfig::load(Some(&path)).expect("config");
    assert_eq!(config.query.top_n, 5);
    assert_eq!(config.query.min_innings, 20);
    assert_eq!(config.data.matches.as_deref(), Some(std::path::Path::new("wc.csv")));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let err = AppConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn malformed_config_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[query\n").expect("write config");
    assert!(matches!(
        AppConfig::load(Some(&path)).unwrap_err(),
        ConfigError::Toml { .. }
    ));
}

#[test]
fn exports_normalized_records_as_csv() {
    let dir = TempDir::new().expect("temp dir");
    let players = dir.path().join("players.csv");
    fs::write(
        &players,
        "Player,Span,Inn,Runs,Avg,100\nA Smith*,2001-2010,120,\"4,500\",41.20,9\nB Jones,,3,90,-,0\n",
    )
    .expect("write players");
    let matches = dir.path().join("matches.csv");
    fs::write(&matches, "Winner,Toss\nIndia,Pakistan won the toss and elected to bat first\n")
        .expect("write matches");
    let dataset = Dataset::load(&players, Some(matches.as_path())).expect("dataset");

    let players_out = dir.path().join("players_out.csv");
    assert_eq!(export_players(&dataset, &players_out).expect("export"), 2);
    let written = fs::read_to_string(&players_out).expect("read export");
    let mut lines = written.lines();
    let header = lines.next().expect("header");
    assert!(header.starts_with("player,key,"));
    assert!(written.contains("a smith"));
    assert!(written.contains("4500"));

    let matches_out = dir.path().join("matches_out.csv");
    assert_eq!(export_matches(&dataset, &matches_out).expect("export"), 1);
    let written = fs::read_to_string(&matches_out).expect("read export");
    assert!(written.contains("India"));
    assert!(written.contains("bat"));
}
