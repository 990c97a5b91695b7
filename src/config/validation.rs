//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{HomingConfig, MotionTiming, RailConfig, TravelConfig, MAX_ACCEL_STEPS};

/// Validate a rail configuration.
///
/// Checks:
/// - Usable travel remains after removing both end buffers
/// - Delay range is non-empty and starts above zero
/// - Acceleration window is within `0..=MAX_ACCEL_STEPS`
/// - Pulse widths are non-zero and fit into the shortest period they pulse at
/// - Homing delays and the seek ceiling are non-zero
pub fn validate_config(config: &RailConfig) -> Result<()> {
    validate_travel(&config.travel)?;
    validate_timing(&config.motion)?;
    validate_homing(&config.homing)?;
    Ok(())
}

fn validate_travel(travel: &TravelConfig) -> Result<()> {
    if travel.end_buffer.0 < 0 || travel.usable_steps().0 <= 0 {
        return Err(Error::Config(ConfigError::InvalidTravel {
            total_steps: travel.total_steps.0,
            end_buffer: travel.end_buffer.0,
        }));
    }
    Ok(())
}

fn validate_timing(timing: &MotionTiming) -> Result<()> {
    if timing.min_delay.0 == 0 || timing.min_delay > timing.max_delay {
        return Err(Error::Config(ConfigError::InvalidDelayRange {
            min_us: timing.min_delay.0,
            max_us: timing.max_delay.0,
        }));
    }

    if timing.pulse_width.0 == 0 || timing.pulse_width > timing.min_delay {
        return Err(Error::Config(ConfigError::InvalidPulseWidth {
            width_us: timing.pulse_width.0,
            period_us: timing.min_delay.0,
        }));
    }

    if !(0..=MAX_ACCEL_STEPS).contains(&timing.accel_steps.0) {
        return Err(Error::Config(ConfigError::InvalidAccelSteps(
            timing.accel_steps.0,
        )));
    }

    Ok(())
}

fn validate_homing(homing: &HomingConfig) -> Result<()> {
    for delay in [homing.seek_delay, homing.backoff_delay] {
        if delay.0 == 0 {
            return Err(Error::Config(ConfigError::InvalidHomingDelay(delay.0)));
        }
    }

    let shortest = homing.seek_delay.min(homing.backoff_delay);
    if homing.pulse_width.0 == 0 || homing.pulse_width > shortest {
        return Err(Error::Config(ConfigError::InvalidPulseWidth {
            width_us: homing.pulse_width.0,
            period_us: shortest.0,
        }));
    }

    if homing.max_seek_steps == Some(0) {
        return Err(Error::Config(ConfigError::InvalidSeekCeiling));
    }

    Ok(())
}
