use pretty_assertions::assert_eq;
use props_fs::{ConfigStore, Error, OutputSettings, Settings};
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_no_settings_file_gives_defaults() {
    let settings = ConfigStore::new().load_settings(None).unwrap();
    assert_eq!(settings, Settings::default());
    assert!(settings.output.escape_unicode);
    assert_eq!(settings.output.unicode_threshold, 0x7E);
}

#[rstest]
#[case("", OutputSettings::default())]
#[case(
    "[output]\nescape_unicode = false\n",
    OutputSettings { escape_unicode: false, unicode_threshold: 0x7E }
)]
#[case(
    "[output]\nunicode_threshold = 255\n",
    OutputSettings { escape_unicode: true, unicode_threshold: 255 }
)]
fn test_load_settings(#[case] toml: &str, #[case] expected: OutputSettings) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.toml");
    fs::write(&path, toml).unwrap();

    let settings = ConfigStore::new().load_settings(Some(&path)).unwrap();
    assert_eq!(settings.output, expected);
}

#[test]
fn test_malformed_settings_is_config_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.toml");
    fs::write(&path, "[output\nescape_unicode = ").unwrap();

    let result = ConfigStore::new().load_settings(Some(&path));
    assert!(matches!(result, Err(Error::ConfigParse { .. })));
}

#[test]
fn test_unknown_settings_key_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.toml");
    fs::write(&path, "[output]\nseparator = \":\"\n").unwrap();

    let result = ConfigStore::new().load_settings(Some(&path));
    assert!(matches!(result, Err(Error::ConfigParse { .. })));
}

#[test]
fn test_missing_settings_file_is_not_found() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.toml");

    let result = ConfigStore::new().load_settings(Some(&path));
    assert!(matches!(result, Err(Error::NotFound { .. })));
}
