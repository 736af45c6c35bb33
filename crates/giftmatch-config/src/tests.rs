//! Tests for match configuration.

use super::*;

#[test]
fn test_defaults() {
    let config = MatchConfig::default();
    assert_eq!(config.min_group_size, DEFAULT_MIN_GROUP_SIZE);
    assert!(config.node_limit().is_none());
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        min_group_size = 4

        [budget]
        node_limit = 50000
    "#;

    let config = MatchConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.min_group_size, 4);
    assert_eq!(config.node_limit(), Some(50_000));
}

#[test]
fn test_toml_parsing_defaults_when_keys_absent() {
    let config = MatchConfig::from_toml_str("").unwrap();
    assert_eq!(config.min_group_size, DEFAULT_MIN_GROUP_SIZE);
    assert!(config.node_limit().is_none());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        min_group_size: 5
        budget:
          node_limit: 1000
    "#;

    let config = MatchConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.min_group_size, 5);
    assert_eq!(config.node_limit(), Some(1000));
}

#[test]
fn test_builder() {
    let config = MatchConfig::new()
        .with_min_group_size(4)
        .with_node_limit(2000);

    assert_eq!(config.min_group_size, 4);
    assert_eq!(config.node_limit(), Some(2000));
}

#[test]
fn test_validate_rejects_tiny_group_size() {
    let err = MatchConfig::from_toml_str("min_group_size = 1").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("min_group_size"));
}

#[test]
fn test_min_group_size_two_is_allowed() {
    // The earlier product behavior; reachable by configuration.
    let config = MatchConfig::from_toml_str("min_group_size = 2").unwrap();
    assert_eq!(config.min_group_size, 2);
}

#[test]
fn test_toml_round_trip() {
    let config = MatchConfig::new().with_min_group_size(4).with_node_limit(7);
    let encoded = toml::to_string(&config).unwrap();
    let decoded = MatchConfig::from_toml_str(&encoded).unwrap();
    assert_eq!(decoded.min_group_size, 4);
    assert_eq!(decoded.node_limit(), Some(7));
}
