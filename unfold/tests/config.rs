use std::time::Duration;

use unfold::{ConfigError, ExpandDirection, ExpanderConfig, DEFAULT_ANIMATION_LENGTH};
use unfold_dom::Easing;

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn test_defaults() {
    let config = ExpanderConfig::default();
    assert_eq!(config.direction, ExpandDirection::TopToBottom);
    assert!(!config.is_expanded);
    assert_eq!(config.expand_animation_length, DEFAULT_ANIMATION_LENGTH);
    assert_eq!(config.collapse_animation_length, DEFAULT_ANIMATION_LENGTH);
    assert_eq!(config.frame_interval_duration(), Duration::from_millis(16));
    assert!(config.validate().is_ok());
}

#[test]
fn test_transition_picks_phase_settings() {
    let config = ExpanderConfig::new()
        .expand_animation_length(100)
        .collapse_animation_length(400)
        .expand_animation_easing(Easing::CubicOut)
        .collapse_animation_easing(Easing::SinInOut);

    let expand = config.transition(true);
    assert_eq!(expand.duration, Duration::from_millis(100));
    assert_eq!(expand.easing, Easing::CubicOut);

    let collapse = config.transition(false);
    assert_eq!(collapse.duration, Duration::from_millis(400));
    assert_eq!(collapse.easing, Easing::SinInOut);
}

// =============================================================================
// JSON
// =============================================================================

#[test]
fn test_from_json_fills_missing_fields() {
    let config = ExpanderConfig::from_json(
        r#"{
            "direction": "bottom_to_top",
            "is_expanded": true,
            "collapse_animation_easing": "ease_in_out"
        }"#,
    )
    .unwrap();

    assert_eq!(config.direction, ExpandDirection::BottomToTop);
    assert!(config.is_expanded);
    assert_eq!(config.collapse_animation_easing, Easing::EaseInOut);
    assert_eq!(config.expand_animation_easing, Easing::Linear);
    assert_eq!(config.expand_animation_length, DEFAULT_ANIMATION_LENGTH);
}

#[test]
fn test_json_roundtrip_preserves_config() {
    let config = ExpanderConfig::new()
        .direction(ExpandDirection::RightToLeft)
        .expanded(true)
        .frame_interval(8);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(ExpanderConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_invalid_json() {
    let err = ExpanderConfig::from_json(r#"{ "direction": "sideways" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_out_of_range_durations() {
    let err = ExpanderConfig::from_json(r#"{ "collapse_animation_length": 120000 }"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidDuration {
            field: "collapse_animation_length",
            value: 120000
        }
    ));

    let err = ExpanderConfig::from_json(r#"{ "frame_interval": 0 }"#).unwrap_err();
    assert_eq!(err.to_string(), "frame_interval of 0ms is out of range");
}

#[test]
fn test_zero_length_is_allowed() {
    let config = ExpanderConfig::from_json(r#"{ "expand_animation_length": 0 }"#).unwrap();
    assert_eq!(config.transition(true).duration, Duration::ZERO);
}

// =============================================================================
// Files
// =============================================================================

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("unfold-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "direction": "left_to_right" }"#).unwrap();
    let config = ExpanderConfig::load(&path);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.unwrap().direction, ExpandDirection::LeftToRight);
}

#[test]
fn test_load_missing_file() {
    let err = ExpanderConfig::load("/nonexistent/unfold.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
