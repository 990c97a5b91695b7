//! Homing configuration from TOML.

use serde::Deserialize;

use super::travel::TravelConfig;
use super::units::Microseconds;

/// Speeds and safety ceiling for limit seeking.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HomingConfig {
    /// Step period while seeking a limit.
    #[serde(rename = "seek_delay_us")]
    pub seek_delay: Microseconds,

    /// Step period while backing off a limit.
    #[serde(rename = "backoff_delay_us")]
    pub backoff_delay: Microseconds,

    /// Step pulse width during homing.
    #[serde(rename = "pulse_width_us", default = "default_pulse_width")]
    pub pulse_width: Microseconds,

    /// Give up a seek after this many steps without contact.
    ///
    /// Defaults to twice the configured travel.
    #[serde(default)]
    pub max_seek_steps: Option<u64>,
}

fn default_pulse_width() -> Microseconds {
    Microseconds(6)
}

impl HomingConfig {
    /// Effective seek ceiling for a given travel.
    pub fn seek_ceiling(&self, travel: &TravelConfig) -> u64 {
        self.max_seek_steps
            .unwrap_or_else(|| travel.total_steps.0.unsigned_abs().saturating_mul(2))
    }
}

impl Default for HomingConfig {
    fn default() -> Self {
        Self {
            seek_delay: Microseconds(350),
            backoff_delay: Microseconds(500),
            pulse_width: default_pulse_width(),
            max_seek_steps: None,
        }
    }
}
