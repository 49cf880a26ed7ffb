//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use std::fs;

use portalsim::config::AppConfig;
use serial_test::serial;
use tempfile::TempDir;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("PSIM_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("PSIM_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_overrides_physics_and_map() {
    std::env::set_var("PSIM_PHYSICS__GRAVITY", "0.02");
    std::env::set_var("PSIM_MAP", "maps/custom.ron");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("PSIM_PHYSICS__GRAVITY");
    std::env::remove_var("PSIM_MAP");

    assert_eq!(config.physics.gravity, 0.02);
    assert_eq!(config.physics.friction, 0.2);
    assert_eq!(config.map.as_deref(), Some("maps/custom.ron"));
}

#[test]
#[serial]
fn test_default_file_matches_defaults() {
    std::env::remove_var("PSIM_WINDOW__TITLE");

    let config = AppConfig::load().unwrap();
    let defaults = AppConfig::default();
    assert_eq!(config.window.title, defaults.window.title);
    assert_eq!(config.physics, defaults.physics);
    assert_eq!(config.paths.map_list, defaults.paths.map_list);
    assert_eq!(config.headless.frames, defaults.headless.frames);
}

#[test]
#[serial]
fn test_user_file_overrides_default_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("default.toml"), "seed = 1\n[window]\ntitle = \"base\"\nwidth = 640\nheight = 480\n").unwrap();
    fs::write(dir.path().join("user.toml"), "seed = 9\n[window]\ntitle = \"mine\"\nwidth = 640\nheight = 480\n").unwrap();

    let config = AppConfig::load_from(dir.path()).unwrap();
    assert_eq!(config.seed, Some(9));
    assert_eq!(config.window.title, "mine");
    assert_eq!(config.window.width, 640);
}

#[test]
#[serial]
fn test_missing_config_dir_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::load_from(dir.path().join("nowhere")).unwrap();
    assert_eq!(config.window.width, 1280);
    assert!(config.map.is_none());
}

#[test]
#[serial]
fn test_invalid_value_is_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("default.toml"), "[physics]\ngravity = \"heavy\"\n").unwrap();
    let result = AppConfig::load_from(dir.path());
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().starts_with("Configuration error"));
}
