use super::*;

const VALID: &str = r#"{
    "slack": {
        "botToken": "xoxb-file",
        "signingSecret": "secret",
        "webhookUrl": "https://hooks.slack.com/services/T0/B0/abc"
    },
    "gateway": { "port": 3000 }
}"#;

#[test]
fn test_load_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, VALID).unwrap();

    let config = load_config(Some(&path)).unwrap();
    assert_eq!(config.gateway.port, 3000);
    assert_eq!(config.gateway.host, "127.0.0.1");
    assert_eq!(config.slack.api_base, "https://slack.com/api");
}

#[test]
fn test_load_config_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = load_config(Some(&path)).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse config JSON"));
}

#[test]
fn test_load_config_fails_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"slack": {"botToken": "xoxb-1", "webhookUrl": "https://h.example"}, "gateway": {"path": "nope"}}"#,
    )
    .unwrap();

    let err = load_config(Some(&path)).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("Configuration validation failed"));
    assert!(msg.contains("gateway.path"));
}

#[test]
fn test_parse_config_unknown_keys_ignored() {
    let config = parse_config(r#"{"slack": {"botToken": "xoxb-1"}, "extra": true}"#).unwrap();
    assert_eq!(config.slack.bot_token, "xoxb-1");
}

#[test]
fn test_parse_config_wrong_type() {
    assert!(parse_config(r#"{"gateway": {"port": "eighty"}}"#).is_err());
}

#[cfg(unix)]
#[test]
fn test_load_config_permissive_file_still_loads() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, VALID).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

    assert!(load_config(Some(&path)).is_ok());
}
