//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use hyperview::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("HV_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("HV_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_nested_env_override() {
    std::env::set_var("HV_ANIMATION__TARGET_FPS", "30");
    std::env::set_var("HV_DISPLAY__SHOW_AXES", "true");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.animation.target_fps, 30);
    assert!(config.display.show_axes);
    std::env::remove_var("HV_ANIMATION__TARGET_FPS");
    std::env::remove_var("HV_DISPLAY__SHOW_AXES");
}

#[test]
#[serial]
fn test_font_path_from_env() {
    std::env::set_var("HV_RENDERING__FONT_PATH", "/opt/fonts/Mono.ttf");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.rendering.font_path.as_deref(), Some("/opt/fonts/Mono.ttf"));
    std::env::remove_var("HV_RENDERING__FONT_PATH");

    let config = AppConfig::load().unwrap();
    assert!(config.rendering.font_path.is_none());
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    let from_file = AppConfig::load_from(cwd.join("config")).unwrap();
    let builtin = AppConfig::default();
    assert_eq!(from_file.window.width, builtin.window.width);
    assert_eq!(from_file.window.height, builtin.window.height);
    assert_eq!(from_file.view.fov, builtin.view.fov);
    assert_eq!(from_file.animation.angle_step, builtin.animation.angle_step);
    assert_eq!(from_file.rendering.background_color, builtin.rendering.background_color);
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.window.width, 640);
    assert_eq!(config.debug.log_level, "info");
}
