use std::fs;

use smartchef::app::Config;
use smartchef::error::{ConfigError, Error};

#[test]
fn config_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[logging]
level = "debug"
format = "json"

[storage]
dir = "/var/lib/smartchef"
namespace = "kitchen"

[generation]
delay_ms = 10
timeout_ms = 1000
"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.storage.namespace, "kitchen");
    assert_eq!(config.generation.delay_ms, 10);
    assert_eq!(config.generation.timeout_ms, 1000);
}

#[test]
fn missing_config_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::load(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}

#[test]
fn config_rejects_unreachable_timeout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[generation]\ndelay_ms = 2000\ntimeout_ms = 2000\n").unwrap();

    match Config::load(&path) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "generation.timeout_ms",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid timeout error, got {err}"),
        Ok(config) => panic!(
            "Expected timeout to be rejected, got {}",
            config.generation.timeout_ms
        ),
    }
}
