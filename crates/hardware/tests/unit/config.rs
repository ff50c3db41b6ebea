//! # Configuration Tests
//!
//! Defaults and JSON deserialization of the run configuration.

use ls8_core::SimError;
use ls8_core::config::*;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.general.max_steps, None);
    assert_eq!(config.system.stack_seed, 0xF4);
}

#[test]
fn test_empty_json_uses_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.general.max_steps, None);
    assert_eq!(config.system.stack_seed, 0xF4);
}

#[test]
fn test_partial_json() {
    let config = Config::from_json(r#"{ "general": { "max_steps": 500 } }"#).unwrap();
    assert_eq!(config.general.max_steps, Some(500));
    assert!(!config.general.trace_instructions);
    assert_eq!(config.system.stack_seed, 0xF4);
}

#[test]
fn test_full_json() {
    let json = r#"{
        "general": { "trace_instructions": true, "max_steps": 10 },
        "system": { "stack_seed": 128 }
    }"#;
    let config = Config::from_json(json).unwrap();
    assert!(config.general.trace_instructions);
    assert_eq!(config.general.max_steps, Some(10));
    assert_eq!(config.system.stack_seed, 128);
}

#[test]
fn test_invalid_json_is_config_error() {
    let err = Config::from_json(r#"{ "system": { "stack_seed": 300 } }"#).unwrap_err();
    assert!(matches!(err, SimError::Config(_)));

    let err = Config::from_json("not json").unwrap_err();
    assert!(matches!(err, SimError::Config(_)));
}
