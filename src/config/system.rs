//! Rail configuration - root configuration structure.

use serde::Deserialize;

use super::homing::HomingConfig;
use super::limits::TravelLimits;
use super::motion::MotionTiming;
use super::travel::TravelConfig;

/// Root configuration structure from TOML.
///
/// `[travel]` is required; `[motion]` and `[homing]` fall back to the
/// measured rig values when omitted.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RailConfig {
    /// Physical travel and end buffers.
    pub travel: TravelConfig,

    /// Step timing for regular moves.
    #[serde(default)]
    pub motion: MotionTiming,

    /// Limit seeking.
    #[serde(default)]
    pub homing: HomingConfig,
}

impl RailConfig {
    /// Buffered travel bounds.
    #[inline]
    pub fn limits(&self) -> TravelLimits {
        self.travel.limits()
    }

    /// Effective homing seek ceiling in steps.
    #[inline]
    pub fn seek_ceiling(&self) -> u64 {
        self.homing.seek_ceiling(&self.travel)
    }
}
