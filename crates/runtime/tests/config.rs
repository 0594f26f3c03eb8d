use std::io::Write;

use battle_runtime::{ConfigError, Runtime, RuntimeConfig, setup_logging};

#[test]
fn loads_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
command_buffer_size = 8
max_concurrent_matches = 3

[battle]
max_turns = 90
critical_multiplier_percent = 200
"#
    )
    .unwrap();

    let config = RuntimeConfig::load(file.path()).unwrap();
    assert_eq!(config.command_buffer_size, 8);
    assert_eq!(config.max_concurrent_matches, 3);
    assert_eq!(config.event_buffer_size, RuntimeConfig::default().event_buffer_size);
    assert_eq!(config.battle.max_turns, 90);
    assert_eq!(config.battle.apply_critical(10), 20);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RuntimeConfig::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[tokio::test]
async fn builder_rejects_invalid_config() {
    let config = RuntimeConfig {
        command_buffer_size: 0,
        ..RuntimeConfig::default()
    };
    let result = Runtime::builder().config(config).build().await;
    assert!(result.is_err());
}

#[test]
fn logging_installs_once() {
    let _ = setup_logging();
    assert!(setup_logging().is_err());
}
