use super::*;
use std::path::Path;

fn parse(content: &str) -> Result<Settings> {
    Settings::parse(content, Path::new("/home/user/.config/pkgdeck"))
}

#[test]
fn test_defaults() {
    let defaults = Settings::default();
    assert_eq!(defaults.binary, "winget");
    assert_eq!(defaults.color, "auto");
    assert!(defaults.progress);
    assert!(defaults.catalog.is_none());
}

#[test]
fn test_empty_file_gives_defaults() {
    assert_eq!(parse("").expect("parse"), Settings::default());
}

#[test]
fn test_parse_all_keys() {
    let settings = parse(
        r#"
        binary "winget.exe"
        color "never"
        progress "off"
        catalog "catalog.json"
        "#,
    )
    .expect("parse");

    assert_eq!(settings.binary, "winget.exe");
    assert_eq!(settings.color, "never");
    assert!(!settings.progress);
    assert_eq!(
        settings.catalog,
        Some(PathBuf::from("/home/user/.config/pkgdeck/catalog.json"))
    );
}

#[test]
fn test_parse_settings_block() {
    let settings = parse(
        r#"
        // Generated settings
        settings {
            color "always"
        }
        "#,
    )
    .expect("parse");

    assert_eq!(settings.color, "always");
    assert_eq!(settings.binary, "winget");
}

#[test]
fn test_absolute_catalog_path_kept() {
    let settings = parse(r#"catalog "/srv/pkgdeck/apps.json""#).expect("parse");
    assert_eq!(settings.catalog, Some(PathBuf::from("/srv/pkgdeck/apps.json")));
}

#[test]
fn test_unknown_key_rejected() {
    match parse(r#"format "yaml""#) {
        Err(PkgdeckError::ConfigError(msg)) => assert!(msg.contains("Unknown setting")),
        other => panic!("Expected ConfigError, got {:?}", other),
    }
}

#[test]
fn test_invalid_values_rejected() {
    assert!(parse(r#"color "rainbow""#).is_err());
    assert!(parse(r#"progress "maybe""#).is_err());
    assert!(parse(r#"binary "  ""#).is_err());
    assert!(parse("progress 1").is_err());
    assert!(parse("binary").is_err());
}

#[test]
fn test_invalid_kdl_is_config_error() {
    match parse("binary \"winget") {
        Err(PkgdeckError::ConfigError(msg)) => assert!(msg.contains("Invalid settings file")),
        other => panic!("Expected ConfigError, got {:?}", other),
    }
}

#[test]
fn test_load_from_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = Settings::load_from(&dir.path().join("settings.kdl")).expect("load");
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_load_from_resolves_against_file_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.kdl");
    fs::write(&path, "catalog \"extra.json\"\nbinary \"winget --disable-interactivity\"\n")
        .expect("write settings");

    let settings = Settings::load_from(&path).expect("load");
    assert_eq!(settings.catalog, Some(dir.path().join("extra.json")));
    assert_eq!(settings.binary, "winget --disable-interactivity");
}
