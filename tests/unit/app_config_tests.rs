/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use ebutt2srt::app_config::{Config, LogLevel, OutputConfig};
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.output.extension, "srt");
    assert_eq!(config.output.collision_limit, 999);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();

    config.output.extension = "".to_string();
    assert!(config.validate().is_err());

    config.output.extension = ".srt".to_string();
    assert!(config.validate().is_err());

    config.output.extension = "sub/srt".to_string();
    assert!(config.validate().is_err());

    config.output.extension = "txt".to_string();
    assert!(config.validate().is_ok());

    config.output.collision_limit = 0;
    assert!(config.validate().is_err());

    config.output.collision_limit = 1000;
    assert!(config.validate().is_err());

    config.output.collision_limit = 1;
    assert!(config.validate().is_ok());
}

/// Test that a missing file yields defaults
#[test]
fn test_load_or_default_withMissingFile_shouldReturnDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let config = Config::load_or_default(temp_dir.path().join("conf.json"))?;
    assert_eq!(config, Config::default());

    Ok(())
}

/// Test saving and loading a configuration
#[test]
fn test_save_and_load_withCustomValues_shouldRoundTrip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let config = Config {
        output: OutputConfig {
            extension: "txt".to_string(),
            collision_limit: 10,
        },
        log_level: LogLevel::Debug,
    };
    config.save(&path)?;

    let loaded = Config::load_or_default(&path)?;
    assert_eq!(loaded, config);

    Ok(())
}

/// Test that log levels use lowercase names in JSON
#[test]
fn test_load_or_default_withLowercaseLogLevel_shouldParse() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", r#"{ "log_level": "trace" }"#)?;

    let config = Config::load_or_default(&path)?;
    assert_eq!(config.log_level, LogLevel::Trace);
    assert_eq!(config.output, OutputConfig::default());

    Ok(())
}

/// Test that broken or invalid files are rejected
#[test]
fn test_load_or_default_withInvalidFiles_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let broken = common::create_test_file(temp_dir.path(), "broken.json", "{ not json")?;
    assert!(Config::load_or_default(&broken).is_err());

    let invalid = common::create_test_file(
        temp_dir.path(),
        "invalid.json",
        r#"{ "output": { "collision_limit": 0 } }"#,
    )?;
    assert!(Config::load_or_default(&invalid).is_err());

    Ok(())
}
