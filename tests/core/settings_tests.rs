//! Tests for user settings persistence
//!
//! Tests cover:
//! - Default settings values
//! - Serialization/deserialization
//! - Save and load through a file

use nameorder::settings::{OutputFormat, UserSettings};
use nameorder::Iso2Code;

// ============================================
// Default Settings Tests
// ============================================

#[test]
fn test_settings_default_version() {
    assert_eq!(UserSettings::default().version, 1);
}

#[test]
fn test_settings_default_values() {
    let settings = UserSettings::default();
    assert_eq!(settings.default_fallback, None);
    assert_eq!(settings.output, OutputFormat::Plain);
}

// ============================================
// Serialization Tests
// ============================================

#[test]
fn test_settings_serialize() {
    let settings = UserSettings {
        version: 1,
        default_fallback: Some(Iso2Code::US),
        output: OutputFormat::Json,
    };
    let json = serde_json::to_string(&settings).unwrap();
    assert!(json.contains(r#""default_fallback":"US""#));
    assert!(json.contains(r#""output":"json""#));
}

#[test]
fn test_settings_deserialize_missing_fields() {
    let settings: UserSettings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings, UserSettings::default());
}

#[test]
fn test_settings_config_path_name() {
    if let Some(path) = UserSettings::get_settings_path() {
        assert!(path.ends_with("nameorder/settings.json"));
    }
}

// ============================================
// File Tests
// ============================================

#[test]
fn test_settings_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let settings = UserSettings {
        version: 1,
        default_fallback: Some(Iso2Code::GB),
        output: OutputFormat::Json,
    };
    settings.save_to(&path).unwrap();

    assert_eq!(UserSettings::load_from(&path), settings);
}

#[test]
fn test_settings_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    assert_eq!(UserSettings::load_from(&path), UserSettings::default());
}

#[test]
fn test_settings_load_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "not json").unwrap();
    assert_eq!(UserSettings::load_from(&path), UserSettings::default());
}
