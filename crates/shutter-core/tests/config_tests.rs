use std::collections::HashMap;

use shutter_core::config::{DatabaseConfig, LogFormat, PaginationParams, DEFAULT_DATABASE_URL};
use shutter_core::ServiceError;

fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_database_config_serialization() {
    let config = DatabaseConfig::new("postgresql://localhost:5432/shutter");

    let serialized = serde_json::to_string(&config).unwrap();
    assert!(serialized.contains("postgresql://localhost:5432/shutter"));

    let deserialized: DatabaseConfig = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized.url, config.url);
    assert_eq!(deserialized.max_connections, config.max_connections);
    assert_eq!(deserialized.min_connections, config.min_connections);
}

#[test]
fn test_database_config_defaults_when_env_empty() {
    let config = DatabaseConfig::from_lookup(lookup_from(&[])).unwrap();

    assert_eq!(config.url, DEFAULT_DATABASE_URL);
    assert_eq!(config.max_connections, 20);
    assert_eq!(config.min_connections, 1);
    assert_eq!(config.connect_timeout_secs, Some(30));
}

#[test]
fn test_database_config_reads_overrides() {
    let config = DatabaseConfig::from_lookup(lookup_from(&[
        ("SHUTTER_DATABASE_URL", "postgres://db/shutter"),
        ("SHUTTER_DB_MAX_CONNECTIONS", "50"),
        ("SHUTTER_DB_MIN_CONNECTIONS", "5"),
        ("SHUTTER_DB_ACQUIRE_TIMEOUT", "3"),
    ]))
    .unwrap();

    assert_eq!(config.url, "postgres://db/shutter");
    assert_eq!(config.max_connections, 50);
    assert_eq!(config.min_connections, 5);
    assert_eq!(config.acquire_timeout_secs, Some(3));
}

#[test]
fn test_database_config_rejects_invalid_numbers() {
    let result =
        DatabaseConfig::from_lookup(lookup_from(&[("SHUTTER_DB_MAX_CONNECTIONS", "lots")]));

    match result {
        Err(ServiceError::Configuration { message }) => {
            assert!(message.contains("SHUTTER_DB_MAX_CONNECTIONS"));
        }
        other => panic!("Expected configuration error, got {:?}", other),
    }
}

#[test]
fn test_database_config_rejects_min_above_max() {
    let result = DatabaseConfig::from_lookup(lookup_from(&[
        ("SHUTTER_DB_MAX_CONNECTIONS", "2"),
        ("SHUTTER_DB_MIN_CONNECTIONS", "10"),
    ]));

    assert!(matches!(result, Err(ServiceError::Configuration { .. })));
}

#[test]
fn test_pagination_params_default_is_unbounded() {
    let params = PaginationParams::default();
    assert_eq!(params.limit, None);
    assert_eq!(params.offset, None);

    let params = PaginationParams::first(10);
    assert_eq!(params.limit, Some(10));
    assert_eq!(params.offset, None);
}

#[test]
fn test_log_format_parsing() {
    assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
    assert_eq!("FULL".parse::<LogFormat>().unwrap(), LogFormat::Full);
    assert!("json".parse::<LogFormat>().is_err());
}
