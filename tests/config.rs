use pretty_assertions::assert_eq;
use std::time::Duration;
use ticklist::config::Config;
use ticklist::error::ConfigError;
use ticklist::icons::IconTheme;
use ticklist::utils::datetime;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(!config.ui.dark_mode);
    assert!(config.ui.show_banner);
    assert_eq!(config.ui.two_column_min_width, 80);
    assert_eq!(config.ui.icon_theme, IconTheme::Ascii);
    assert_eq!(config.notifications.timeout(), Duration::from_millis(1500));
    assert!(config.display.show_created_at);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    config.notifications.timeout_ms = 50;
    assert_eq!(
        config.validate(),
        Err(ConfigError::TimeoutOutOfRange {
            value: 50,
            min: 100,
            max: 60_000
        })
    );

    config.notifications.timeout_ms = 1500;
    config.ui.two_column_min_width = 10;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::BreakpointOutOfRange { value: 10, .. })
    ));

    config.ui.two_column_min_width = 100;
    config.logging.level = "loud".to_string();
    assert_eq!(config.validate(), Err(ConfigError::UnknownLogLevel("loud".to_string())));
}

#[test]
fn test_invalid_time_format_rejected() {
    let mut config = Config::default();
    config.display.time_format = "%Q".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidFormat {
            field: "display.time_format",
            ..
        })
    ));

    config.display.time_format = String::new();
    assert!(config.validate().is_err());

    config.display.time_format = "%I:%M %p".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_log_level_is_case_insensitive() {
    let mut config = Config::default();
    config.logging.level = "DEBUG".to_string();
    assert_eq!(config.logging.level_filter(), Ok(log::LevelFilter::Debug));
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("two_column_min_width = 80"));
    assert!(toml_str.contains("timeout_ms = 1500"));
    assert!(toml_str.contains("icon_theme = \"ascii\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
dark_mode = true
icon_theme = "unicode"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert!(config.ui.dark_mode);
    assert_eq!(config.ui.icon_theme, IconTheme::Unicode);
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert!(config.ui.show_banner);
    assert_eq!(config.ui.two_column_min_width, 80);
    assert_eq!(config.notifications.timeout_ms, 1500);
    assert_eq!(config.display.date_format, datetime::DEFAULT_DATE_FORMAT);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_initial_ui_state_follows_config() {
    let mut config = Config::default();
    config.ui.dark_mode = true;
    config.ui.show_banner = false;

    let ui = config.initial_ui_state();
    assert!(ui.dark_mode);
    assert!(!ui.show_banner);
    assert!(!ui.notif.visible);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let temp_dir = std::env::temp_dir().join("ticklist_test_invalid_config");
    let _ = std::fs::remove_dir_all(&temp_dir);
    std::fs::create_dir_all(&temp_dir).unwrap();
    let config_path = temp_dir.join("ticklist.toml");
    std::fs::write(&config_path, "[notifications]\ntimeout_ms = 0\n").unwrap();

    let err = Config::load_from_file(&config_path).unwrap_err();
    assert!(format!("{:#}", err).contains("timeout_ms"));

    let _ = std::fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("ticklist_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    Config::generate_default_config(&config_path).unwrap();
    assert!(config_path.exists());

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# ticklist configuration file"));
    assert!(content.contains("timeout_ms = 1500"));

    // The generated file loads back to the defaults
    let loaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(loaded, Config::default());

    let _ = fs::remove_dir_all(&temp_dir);
}
