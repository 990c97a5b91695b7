//! Rail travel configuration from TOML.

use serde::Deserialize;

use super::limits::TravelLimits;
use super::units::Steps;

/// Physical travel of the rail.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TravelConfig {
    /// Measured steps between the two limit switches.
    pub total_steps: Steps,

    /// Steps to stay away from each physical limit.
    pub end_buffer: Steps,

    /// Swap the direction pin levels (default: left = high, right = low).
    #[serde(default)]
    pub invert_direction: bool,
}

impl TravelConfig {
    /// Steps between the two buffered limits.
    #[inline]
    pub fn usable_steps(&self) -> Steps {
        self.total_steps - self.end_buffer - self.end_buffer
    }

    /// Buffered travel bounds.
    #[inline]
    pub fn limits(&self) -> TravelLimits {
        TravelLimits::from_config(self)
    }
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            total_steps: Steps(184_245),
            end_buffer: Steps(150),
            invert_direction: false,
        }
    }
}
