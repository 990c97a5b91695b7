//! Step timing configuration from TOML.

use serde::Deserialize;

use super::units::{Microseconds, Steps};

/// Longest acceleration ramp accepted, in steps.
///
/// Keeps the exact easing arithmetic inside 128 bits.
pub const MAX_ACCEL_STEPS: i64 = 1 << 20;

/// Step timing for regular moves.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MotionTiming {
    /// Step period at cruise speed.
    #[serde(rename = "min_delay_us")]
    pub min_delay: Microseconds,

    /// Step period at the start and end of a move.
    #[serde(rename = "max_delay_us")]
    pub max_delay: Microseconds,

    /// Steps spent ramping up (and again ramping down) on long moves.
    pub accel_steps: Steps,

    /// Width of the high part of a step pulse.
    #[serde(rename = "pulse_width_us", default = "default_pulse_width")]
    pub pulse_width: Microseconds,

    /// Cruise-phase pauses that break up audible resonance.
    #[serde(default)]
    pub resonance: ResonanceBreak,
}

fn default_pulse_width() -> Microseconds {
    Microseconds(8)
}

impl Default for MotionTiming {
    fn default() -> Self {
        Self {
            min_delay: Microseconds(160),
            max_delay: Microseconds(450),
            accel_steps: Steps(400),
            pulse_width: default_pulse_width(),
            resonance: ResonanceBreak::default(),
        }
    }
}

/// A short pause every `stride` cruise steps.
///
/// Strides are small primes, different per direction, so the pauses never
/// line up with the mechanics. A stride of zero disables the pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResonanceBreak {
    /// Stride while moving left.
    pub left_stride: u32,
    /// Stride while moving right.
    pub right_stride: u32,
    /// Length of each pause.
    #[serde(rename = "pause_us")]
    pub pause: Microseconds,
}

impl ResonanceBreak {
    /// No resonance pauses.
    pub const DISABLED: Self = Self {
        left_stride: 0,
        right_stride: 0,
        pause: Microseconds(0),
    };
}

impl Default for ResonanceBreak {
    fn default() -> Self {
        Self {
            left_stride: 43,
            right_stride: 41,
            pause: Microseconds(10),
        }
    }
}
