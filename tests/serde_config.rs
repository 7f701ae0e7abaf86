//! Serde support for configuration and errors
#![cfg(feature = "serde")]

use lotto_validate::{ValidationError, ValidatorConfig, Validators};

#[test]
fn test_config_defaults_missing_fields() {
    let config: ValidatorConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, ValidatorConfig::default());
    assert_eq!(config.delimiter, ",");
}

#[test]
fn test_config_from_json() {
    let config: ValidatorConfig = serde_json::from_str(r#"{"delimiter": ";"}"#).unwrap();
    let validators = Validators::new(config).unwrap();
    assert!(validators.is_numbers_in_array("1;2"));
}

#[test]
fn test_error_round_trips_through_json() {
    let err = ValidationError::BelowMinimum { min: 1000 };
    let json = serde_json::to_string(&err).unwrap();
    let back: ValidationError = serde_json::from_str(&json).unwrap();
    assert_eq!(back, err);
}
