//! Loading configuration files from disk.

use skirmish::{GameConfig, GameState, SkirmishError};
use std::io::Write;
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = config_file(r#"{ "player_speed": 4.5, "ranged_fire_cooldown": 90 }"#);
    let config = GameConfig::load_from_file(file.path()).unwrap();

    assert_eq!(config.player_speed, 4.5);
    assert_eq!(config.ranged_fire_cooldown, 90);
    assert_eq!(config.tile_size, 40.0);
    assert_eq!(config.map_width, 20);
    assert_eq!(config.player_attack_cooldown, 20);
}

#[test]
fn test_loaded_config_drives_session() {
    let file = config_file(r#"{ "map_width": 24, "map_height": 14 }"#);
    let config = GameConfig::load_from_file(file.path()).unwrap();
    let game_state = GameState::new(config).unwrap();

    assert_eq!(game_state.world().grid.width(), 24);
    assert_eq!(game_state.world().grid.world_size(), (960.0, 560.0));
}

#[test]
fn test_malformed_json_rejected() {
    let file = config_file("{ player_speed: fast }");
    assert!(matches!(
        GameConfig::load_from_file(file.path()),
        Err(SkirmishError::Serde(_))
    ));
}

#[test]
fn test_invalid_values_rejected() {
    let file = config_file(r#"{ "tile_size": 0.0 }"#);
    assert!(matches!(
        GameConfig::load_from_file(file.path()),
        Err(SkirmishError::InvalidConfig(_))
    ));

    let file = config_file(r#"{ "enemy_speed": -1.0 }"#);
    assert!(matches!(
        GameConfig::load_from_file(file.path()),
        Err(SkirmishError::InvalidConfig(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    assert!(matches!(
        GameConfig::load_from_file(&missing),
        Err(SkirmishError::Io(_))
    ));
}
