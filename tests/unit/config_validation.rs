//! Unit tests for configuration validation.

use rail_motion::config::units::{Microseconds, Steps};
use rail_motion::config::{validate_config, RailConfig, MAX_ACCEL_STEPS};
use rail_motion::error::{ConfigError, Error};

/// The built-in rig configuration is valid.
#[test]
fn test_default_config_passes_validation() {
    assert!(validate_config(&RailConfig::default()).is_ok());
}

/// Buffers that swallow the whole travel are rejected.
#[test]
fn test_travel_must_exceed_both_buffers() {
    let mut config = RailConfig::default();
    config.travel.total_steps = Steps(300);
    config.travel.end_buffer = Steps(150);

    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidTravel {
            total_steps: 300,
            end_buffer: 150,
        }))
    );

    config.travel.total_steps = Steps(301);
    assert!(validate_config(&config).is_ok());
}

/// A negative buffer is rejected.
#[test]
fn test_negative_buffer() {
    let mut config = RailConfig::default();
    config.travel.end_buffer = Steps(-1);

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidTravel { .. }))
    ));
}

/// Cruise delay must be non-zero and not slower than the start delay.
#[test]
fn test_delay_range() {
    let mut config = RailConfig::default();
    config.motion.min_delay = Microseconds(500);

    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidDelayRange {
            min_us: 500,
            max_us: 450,
        }))
    );

    config.motion.min_delay = Microseconds(0);
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidDelayRange { .. }))
    ));

    // Flat profile is allowed.
    config.motion.min_delay = Microseconds(450);
    assert!(validate_config(&config).is_ok());
}

/// Pulse widths must fit into the shortest period they are used with.
#[test]
fn test_pulse_widths() {
    let mut config = RailConfig::default();
    config.motion.pulse_width = Microseconds(161);
    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidPulseWidth {
            width_us: 161,
            period_us: 160,
        }))
    );

    let mut config = RailConfig::default();
    config.homing.pulse_width = Microseconds(0);
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidPulseWidth { .. }))
    ));
}

/// Acceleration window bounds.
#[test]
fn test_accel_steps_bounds() {
    let mut config = RailConfig::default();

    config.motion.accel_steps = Steps(0);
    assert!(validate_config(&config).is_ok());

    config.motion.accel_steps = Steps(MAX_ACCEL_STEPS);
    assert!(validate_config(&config).is_ok());

    config.motion.accel_steps = Steps(MAX_ACCEL_STEPS + 1);
    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidAccelSteps(MAX_ACCEL_STEPS + 1)))
    );

    config.motion.accel_steps = Steps(-5);
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidAccelSteps(-5)))
    ));
}

/// Homing delays and the seek ceiling must be non-zero.
#[test]
fn test_homing_values() {
    let mut config = RailConfig::default();
    config.homing.backoff_delay = Microseconds(0);
    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidHomingDelay(0)))
    );

    let mut config = RailConfig::default();
    config.homing.max_seek_steps = Some(0);
    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidSeekCeiling))
    );
}
