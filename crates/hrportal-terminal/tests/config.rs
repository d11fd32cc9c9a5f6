use std::path::PathBuf;

use hrportal_core::models::role::PolicyRegion;
use hrportal_terminal::config::{load_config_from, parse_config, save_config_to, PortalConfig};

#[test]
fn defaults_fill_missing_fields() {
    let config = parse_config(r#"{"config_version": 1}"#).unwrap();
    assert_eq!(config.api_base, "http://localhost:8000");
    assert_eq!(config.default_policy_region, PolicyRegion::India);
    assert_eq!(config.download_dir, None);
    assert_eq!(config.download_dir(), PathBuf::from("."));
}

#[test]
fn v0_country_is_renamed() {
    let config = parse_config(r#"{"api_base": "http://hr.internal:9000", "country": "foreign"}"#)
        .unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.api_base, "http://hr.internal:9000");
    assert_eq!(config.default_policy_region, PolicyRegion::Foreign);
}

#[test]
fn v0_without_region_is_backfilled() {
    let config = parse_config("{}").unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.default_policy_region, PolicyRegion::India);
}

#[test]
fn newer_version_is_rejected() {
    let err = parse_config(r#"{"config_version": 2}"#).unwrap_err();
    assert!(err.to_string().contains("newer than this build"));
}

#[test]
fn version_beyond_u32_is_rejected() {
    let err = parse_config(r#"{"config_version": 4294967297}"#).unwrap_err();
    assert!(err.to_string().contains("newer than this build"));
}

#[test]
fn non_object_is_rejected() {
    assert!(parse_config("[]").is_err());
    assert!(parse_config("not json").is_err());
}

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let config = PortalConfig {
        config_version: 0,
        api_base: "https://portal.example".to_string(),
        default_policy_region: PolicyRegion::Foreign,
        download_dir: Some(dir.path().join("answers")),
    };
    save_config_to(&path, &config).unwrap();

    assert!(!path.with_extension("json.tmp").exists());
    let loaded = load_config_from(&path).unwrap();
    assert_eq!(
        loaded,
        PortalConfig {
            config_version: 1,
            ..config
        }
    );

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
