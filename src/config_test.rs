#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_uses_narrow_bounds() {
    let config = ViewportConfig::default();
    assert_eq!(config.scale_min, 0.8);
    assert_eq!(config.scale_max, 2.0);
    assert_eq!(config.wheel_step, 0.1);
    assert_eq!(config.button_step, 0.2);
    assert_eq!(config.canvas_class, "notes-canvas");
    assert_eq!(config.interactive_selector, ".note");
    assert!(config.validate().is_ok());
}

#[test]
fn wide_preset_widens_only_bounds() {
    let config = ViewportConfig::wide();
    assert_eq!(config.scale_min, 0.5);
    assert_eq!(config.scale_max, 3.0);
    assert_eq!(config.wheel_step, ViewportConfig::default().wheel_step);
    assert!(config.validate().is_ok());
}

#[test]
fn from_json_fills_missing_keys_with_defaults() {
    let config = ViewportConfig::from_json(r#"{"scale_max": 3.0}"#).unwrap();
    assert_eq!(config.scale_min, 0.8);
    assert_eq!(config.scale_max, 3.0);
    assert_eq!(config.canvas_class, "notes-canvas");
}

#[test]
fn from_json_empty_object_is_default() {
    let config = ViewportConfig::from_json("{}").unwrap();
    assert_eq!(config, ViewportConfig::default());
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = ViewportConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_json_rejects_inverted_range() {
    let err = ViewportConfig::from_json(r#"{"scale_min": 2.5, "scale_max": 1.0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidScaleRange { min, max } if min == 2.5 && max == 1.0));
}

#[test]
fn validate_rejects_non_positive_min() {
    let config = ViewportConfig { scale_min: 0.0, ..ViewportConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidScaleRange { .. })));
}

#[test]
fn validate_rejects_non_finite_bounds() {
    let config = ViewportConfig { scale_max: f64::INFINITY, ..ViewportConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidScaleRange { .. })));
}

#[test]
fn validate_accepts_fixed_scale() {
    let config = ViewportConfig { scale_min: 1.0, scale_max: 1.0, ..ViewportConfig::default() };
    assert!(config.validate().is_ok());
}

#[test]
fn validate_rejects_out_of_range_steps() {
    let config = ViewportConfig { wheel_step: 0.0, ..ViewportConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidStep { name: "wheel_step", .. })));

    let config = ViewportConfig { button_step: 1.0, ..ViewportConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidStep { name: "button_step", .. })));
}

#[test]
fn validate_rejects_blank_selectors() {
    let config = ViewportConfig { canvas_class: "  ".into(), ..ViewportConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::EmptySelector { name: "canvas_class" })));

    let config = ViewportConfig { interactive_selector: String::new(), ..ViewportConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::EmptySelector { name: "interactive_selector" })));
}

#[test]
fn clamp_scale_respects_bounds() {
    let config = ViewportConfig::default();
    assert_eq!(config.clamp_scale(5.0), 2.0);
    assert_eq!(config.clamp_scale(0.1), 0.8);
    assert_eq!(config.clamp_scale(1.3), 1.3);
}

#[test]
fn error_messages_name_the_problem() {
    let err = ConfigError::InvalidStep { name: "wheel_step", value: 2.0 };
    assert_eq!(err.to_string(), "wheel_step must be in (0, 1), got 2");
}
