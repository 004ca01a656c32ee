use std::fs;

use anyhow::Result;
use memberdesk::config::{ClientConfig, ConfigError};

#[test]
fn missing_file_yields_defaults() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.toml");
    let config = ClientConfig::load_from(&path)?;
    assert_eq!(config, ClientConfig::default());
    Ok(())
}

#[test]
fn partial_file_fills_in_defaults() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.toml");
    fs::write(&path, "base_url = \"https://admin.example.test\"\n")?;

    let config = ClientConfig::load_from(&path)?;
    assert_eq!(config.base_url, "https://admin.example.test");
    assert_eq!(config.timeout_seconds, ClientConfig::default().timeout_seconds);
    assert_eq!(config.default_page_size, ClientConfig::default().default_page_size);
    Ok(())
}

#[test]
fn invalid_toml_is_a_parse_error() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.toml");
    fs::write(&path, "base_url = not quoted")?;

    let err = ClientConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    Ok(())
}

#[test]
fn non_http_base_url_fails_validation() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.toml");
    fs::write(&path, "base_url = \"ftp://example.test\"\n")?;

    let err = ClientConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    Ok(())
}

#[test]
fn zero_page_size_fails_validation() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "base_url = \"https://admin.example.test\"\ndefault_page_size = 0\n",
    )?;

    let err = ClientConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    Ok(())
}
