//! Eased motion profile calculation.
//!
//! Step periods follow a cubic smoothstep `e = t²(3 - 2t)` between the slow
//! start period and the fast cruise period. The ramp down mirrors the ramp up,
//! so every move starts and ends at rest without a jerk.
//!
//! The easing is evaluated in exact integer arithmetic: with `t = n / w`,
//! `e = n²(3w - 2n) / w³`, floored, so each ramp is exactly monotone.

use crate::config::units::{Microseconds, Steps};
use crate::config::{MotionTiming, MAX_ACCEL_STEPS};

/// Direction of travel along the rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Toward the left limit (decreasing position).
    Left,
    /// Toward the right limit (increasing position).
    Right,
}

impl Direction {
    /// Direction that moves `from` toward `to`.
    ///
    /// Equal positions map to `Left`; such a move has no steps anyway.
    #[inline]
    pub fn toward(from: Steps, to: Steps) -> Self {
        if to > from {
            Direction::Right
        } else {
            Direction::Left
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }

    /// Get the opposite direction.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Direction pin level for this direction (left = high unless inverted).
    #[inline]
    pub fn pin_high(self, invert: bool) -> bool {
        match self {
            Direction::Left => !invert,
            Direction::Right => invert,
        }
    }

    /// Label used by diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }
}

/// Current phase of motion execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionPhase {
    /// Ramping from the start period down to the cruise period.
    Accelerating,
    /// Stepping at the cruise period.
    Cruising,
    /// Ramping from the cruise period back up to the start period.
    Decelerating,
    /// Motion complete.
    Complete,
}

/// Computed profile for one move.
#[derive(Debug, Clone, PartialEq)]
pub struct EasedProfile {
    /// Total steps to move (absolute value).
    pub total_steps: u32,

    /// Direction of motion.
    pub direction: Direction,

    /// Steps in the acceleration ramp (`min(accel_steps, total / 2)`).
    pub accel_steps: u32,

    /// Steps at the cruise period.
    pub cruise_steps: u32,

    /// Steps in the deceleration ramp (same length as the acceleration ramp).
    pub decel_steps: u32,

    /// Cruise step period.
    pub min_delay: Microseconds,

    /// Start and end step period.
    pub max_delay: Microseconds,

    /// Cruise steps between resonance pauses (0 = never).
    pub resonance_stride: u32,

    /// Length of a resonance pause.
    pub resonance_pause: Microseconds,
}

impl EasedProfile {
    /// Create a profile for a move of `total_steps` in `direction`.
    pub fn new(total_steps: u32, direction: Direction, timing: &MotionTiming) -> Self {
        let configured = timing.accel_steps.0.clamp(0, MAX_ACCEL_STEPS) as u32;
        let window = configured.min(total_steps / 2);

        let resonance_stride = match direction {
            Direction::Left => timing.resonance.left_stride,
            Direction::Right => timing.resonance.right_stride,
        };

        Self {
            total_steps,
            direction,
            accel_steps: window,
            cruise_steps: total_steps - 2 * window,
            decel_steps: window,
            min_delay: timing.min_delay,
            max_delay: timing.max_delay.max(timing.min_delay),
            resonance_stride,
            resonance_pause: timing.resonance.pause,
        }
    }

    /// Create a zero-length profile (no motion).
    pub fn zero(timing: &MotionTiming) -> Self {
        Self::new(0, Direction::Left, timing)
    }

    /// Check if this is a zero-length profile.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.total_steps == 0
    }

    /// Get the phase at a given step index.
    pub fn phase_at(&self, step: u32) -> MotionPhase {
        if step >= self.total_steps {
            MotionPhase::Complete
        } else if step < self.accel_steps {
            MotionPhase::Accelerating
        } else if self.total_steps - step <= self.decel_steps {
            MotionPhase::Decelerating
        } else {
            MotionPhase::Cruising
        }
    }

    /// Step period (pulse start to next pulse start) for a given step index.
    ///
    /// Always within `[min_delay, max_delay]`.
    pub fn delay_at(&self, step: u32) -> Microseconds {
        let span = self.max_delay.0 - self.min_delay.0;

        match self.phase_at(step) {
            MotionPhase::Complete => self.max_delay,
            MotionPhase::Cruising => self.min_delay,
            MotionPhase::Accelerating => {
                let eased = scale(span, eased_numerator(step, self.accel_steps), self.accel_steps);
                Microseconds(self.max_delay.0 - eased)
            }
            MotionPhase::Decelerating => {
                let remaining = (self.total_steps - step).min(self.decel_steps);
                let w = self.decel_steps as u128;
                let inverse = w * w * w - eased_numerator(remaining, self.decel_steps);
                Microseconds(self.min_delay.0 + scale(span, inverse, self.decel_steps))
            }
        }
    }

    /// Extra pause to insert after the pulse at `step`.
    ///
    /// Only cruise steps pause, once every `resonance_stride` steps.
    pub fn pause_after(&self, step: u32) -> Microseconds {
        if self.resonance_stride == 0 || self.phase_at(step) != MotionPhase::Cruising {
            return Microseconds::ZERO;
        }

        let cruise_index = step - self.accel_steps;
        if (cruise_index + 1) % self.resonance_stride == 0 {
            self.resonance_pause
        } else {
            Microseconds::ZERO
        }
    }
}

/// `n²(3w - 2n)`, the smoothstep numerator over the denominator `w³`.
#[inline]
fn eased_numerator(n: u32, w: u32) -> u128 {
    let n = n.min(w) as u128;
    let w = w as u128;
    n * n * (3 * w - 2 * n)
}

/// `floor(span * numerator / w³)`; `numerator <= w³` keeps the result `<= span`.
#[inline]
fn scale(span: u32, numerator: u128, w: u32) -> u32 {
    if w == 0 {
        return 0;
    }
    let w = w as u128;
    let scaled = span as u128 * numerator / (w * w * w);
    scaled.min(span as u128) as u32
}
