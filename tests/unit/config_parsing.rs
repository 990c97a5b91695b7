//! Unit tests for TOML configuration parsing.

use rail_motion::config::units::{Microseconds, Steps};
use rail_motion::config::{RailConfig, ResonanceBreak};
use rail_motion::parse_config;

const RIG_CONFIG: &str = r#"
# Measured rig: 184245 steps between the switches.
[travel]
total_steps = 184245
end_buffer = 150

[motion]
min_delay_us = 160
max_delay_us = 450
accel_steps = 400
pulse_width_us = 8

[motion.resonance]
left_stride = 43
right_stride = 41
pause_us = 10

[homing]
seek_delay_us = 350
backoff_delay_us = 500
pulse_width_us = 6
"#;

/// The rig file describes exactly the built-in defaults.
#[test]
fn test_rig_file_matches_defaults() {
    let config = parse_config(RIG_CONFIG).expect("rig config should parse");
    assert_eq!(config, RailConfig::default());
}

/// Limits and center derive from the travel section.
#[test]
fn test_rig_limits() {
    let config = parse_config(RIG_CONFIG).unwrap();
    let limits = config.limits();

    assert_eq!(limits.left, Steps(150));
    assert_eq!(limits.right, Steps(184_095));
    assert_eq!(limits.usable(), Steps(183_945));
    assert_eq!(limits.middle(), Steps(91_972));
    assert_eq!(limits.center(), Steps(92_122));
}

/// Omitted sections fall back to the rig values.
#[test]
fn test_optional_sections_default() {
    let config = parse_config(
        r#"
[travel]
total_steps = 50000
end_buffer = 200
"#,
    )
    .unwrap();

    assert_eq!(config.travel.total_steps, Steps(50_000));
    assert!(!config.travel.invert_direction);
    assert_eq!(config.motion.max_delay, Microseconds(450));
    assert_eq!(config.motion.resonance, ResonanceBreak::default());
    assert_eq!(config.homing.backoff_delay, Microseconds(500));
    assert_eq!(config.seek_ceiling(), 100_000);
}

/// Resonance pauses can be switched off per direction.
#[test]
fn test_resonance_can_be_disabled() {
    let config = parse_config(
        r#"
[travel]
total_steps = 50000
end_buffer = 200

[motion]
min_delay_us = 160
max_delay_us = 450
accel_steps = 400

[motion.resonance]
left_stride = 0
right_stride = 0
pause_us = 0
"#,
    )
    .unwrap();

    assert_eq!(config.motion.resonance, ResonanceBreak::DISABLED);
    assert_eq!(config.motion.pulse_width, Microseconds(8));
}

/// A wrongly typed value is a parse error.
#[test]
fn test_wrong_type_is_parse_error() {
    let result = parse_config(
        r#"
[travel]
total_steps = "far"
end_buffer = 150
"#,
    );

    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Configuration error: Parse error"));
}

#[cfg(feature = "std")]
#[test]
fn test_load_missing_file() {
    use rail_motion::error::{ConfigError, Error};

    let result = rail_motion::load_config("/nonexistent/rail.toml");
    assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
}
