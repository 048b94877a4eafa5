use super::*;

#[test]
fn parses_both_tiers() {
    let config = RequirementsConfig::from_json_str(
        r#"{"incompatible": {"ie": "<9"}, "partially_compatible": {"safari": "<7"}}"#,
    )
    .unwrap();
    assert_eq!(config.incompatible.get("ie").map(String::as_str), Some("<9"));
    assert_eq!(
        config.partially_compatible.get("safari").map(String::as_str),
        Some("<7")
    );
}

#[test]
fn missing_tier_keys_default_to_empty() {
    let config = RequirementsConfig::from_json_str(r#"{"incompatible": {"ie": "<9"}}"#).unwrap();
    assert!(config.partially_compatible.is_empty());

    let config = RequirementsConfig::from_json_str("{}").unwrap();
    assert!(config.incompatible.is_empty());
    assert!(config.partially_compatible.is_empty());
}

#[test]
fn invalid_json_is_rejected() {
    let err = RequirementsConfig::from_json_str("not json").unwrap_err();
    assert_eq!(err, ConfigLoadError::InvalidConfig);
    assert_eq!(err.user_message(), "Requirements unavailable (invalid JSON)");
}

#[test]
fn missing_file_is_unreadable() {
    let err = RequirementsConfig::load_from_path("/nonexistent/requirements.json").unwrap_err();
    assert_eq!(err, ConfigLoadError::Unreadable);
}

#[test]
fn embedded_defaults_parse_and_cover_both_tiers() {
    let defaults = defaults();
    assert!(!defaults.incompatible.is_empty());
    assert!(!defaults.partially_compatible.is_empty());
}

#[test]
fn load_or_defaults_falls_back_on_missing_file() {
    let config = load_or_defaults("/nonexistent/requirements.json");
    assert_eq!(&config, defaults());
}

#[test]
fn config_round_trips_through_json() {
    let config = RequirementsConfig::from_json_str(
        r#"{"incompatible": {"ie": "<9"}, "partially_compatible": {"safari": "<7"}}"#,
    )
    .unwrap();
    let encoded = serde_json::to_string(&config).unwrap();
    assert_eq!(RequirementsConfig::from_json_str(&encoded).unwrap(), config);
}
