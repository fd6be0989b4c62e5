//! Tests for scan configuration

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use tmplcheck::config::{Config, ConfigError};

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.scan.extensions, vec!["html", "tmpl", "gohtml"]);
    assert!(config.checks.delimiters);
    assert!(config.checks.blocks);
    assert!(config.checks.comments);
}

#[test]
fn test_config_full_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tmplcheck.toml");
    fs::write(
        &path,
        "[scan]\nextensions = [\"html\"]\n\n[checks]\ndelimiters = true\nblocks = false\ncomments = false\n",
    )
    .unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.scan.extensions, vec!["html"]);
    assert!(config.checks.delimiters);
    assert!(!config.checks.blocks);
    assert!(!config.checks.comments);
}

#[test]
fn test_config_partial_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tmplcheck.toml");
    fs::write(&path, "[checks]\ncomments = false\n").unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.scan.extensions, vec!["html", "tmpl", "gohtml"]);
    assert!(config.checks.delimiters);
    assert!(!config.checks.comments);
}

#[test]
fn test_config_empty_file_is_default() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tmplcheck.toml");
    fs::write(&path, "").unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.scan.extensions, vec!["html", "tmpl", "gohtml"]);
}

#[test]
fn test_config_explicit_missing_file_is_an_error() {
    let result = Config::load(Some(Path::new("/no/such/tmplcheck.toml")));
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

#[test]
fn test_config_invalid_toml_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tmplcheck.toml");
    fs::write(&path, "[scan\nextensions = nope").unwrap();

    let result = Config::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}
