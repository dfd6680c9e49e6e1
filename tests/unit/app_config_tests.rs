/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use std::fs;
use mdnorm::app_config::{Config, LogLevel};
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert!(config.files.is_empty());
    assert_eq!(config.protected_terms.len(), 12);
    assert_eq!(config.protected_terms[0], "D.U.N.K.Showcase");
    assert!(config.protected_terms.contains(&"Novel Core".to_string()));
    assert_eq!(config.blockquote.marker, "from SKY-HI");
    assert_eq!(config.blockquote.heading, "> ### from SKY-HI");
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    config.blockquote.marker = "  ".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.blockquote.heading = "### from SKY-HI".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.protected_terms.push("Novel Core".to_string());
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.protected_terms.push(String::new());
    assert!(config.validate().is_err());
}

/// Test that markers the pipeline would hide or split are rejected
#[test]
fn test_config_validation_withUnmatchableMarker_shouldFail() {
    let mut config = Config::default();
    config.blockquote.marker = "from\u{3000}SKY-HI".to_string();
    assert!(config.validate().is_err());

    config.blockquote.marker = "from\tSKY-HI".to_string();
    assert!(config.validate().is_err());

    config.blockquote.marker = "from Novel Core".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("Novel Core"));

    config.blockquote.marker = "Message: Tanaka!".to_string();
    assert!(config.validate().is_ok());
}

/// Test that missing fields fall back to defaults
#[test]
fn test_config_deserialize_withPartialJson_shouldFillDefaults() -> Result<()> {
    let config: Config = serde_json::from_str(r#"{"files": ["a.md"], "log_level": "debug"}"#)?;

    assert_eq!(config.files.len(), 1);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.protected_terms, Config::default().protected_terms);
    assert_eq!(config.blockquote.marker, "from SKY-HI");

    Ok(())
}

/// Test that load_or_create writes a default file when missing
#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefault() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("mdnorm.json");

    let config = Config::load_or_create(&path)?;

    assert!(path.exists());
    assert_eq!(config, Config::default());
    assert_eq!(Config::load(&path)?, config);

    Ok(())
}

/// Test that a saved config round-trips through the file
#[test]
fn test_save_withCustomConfig_shouldLoadSameValues() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("custom.json");

    let mut config = Config::default();
    config.protected_terms = vec!["MAZZEL".to_string()];
    config.blockquote.marker = "from Novel Core".to_string();
    config.save(&path)?;

    let loaded = Config::load(&path)?;
    assert_eq!(loaded.protected_terms, vec!["MAZZEL".to_string()]);
    assert_eq!(loaded.blockquote.marker, "from Novel Core");

    Ok(())
}

/// Test that broken JSON is reported
#[test]
fn test_load_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "{ not json")?;

    let err = Config::load(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));

    Ok(())
}

/// Test log level mapping
#[test]
fn test_logLevel_toLevelFilter_shouldMapEachLevel() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
