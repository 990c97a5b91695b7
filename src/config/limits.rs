//! Buffered travel bounds.

use super::travel::TravelConfig;
use super::units::Steps;

/// Legal position range `[left, right]`, derived from [`TravelConfig`].
///
/// Requests outside the range are clamped, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TravelLimits {
    /// Left bound (`end_buffer`).
    pub left: Steps,
    /// Right bound (`total_steps - end_buffer`).
    pub right: Steps,
}

impl TravelLimits {
    /// Create limits from explicit bounds.
    pub const fn new(left: Steps, right: Steps) -> Self {
        Self { left, right }
    }

    /// Derive the buffered bounds from the travel configuration.
    pub fn from_config(travel: &TravelConfig) -> Self {
        Self {
            left: travel.end_buffer,
            right: travel.total_steps - travel.end_buffer,
        }
    }

    /// Steps between the bounds.
    #[inline]
    pub fn usable(&self) -> Steps {
        self.right - self.left
    }

    /// Half of the usable range, measured from the left bound.
    #[inline]
    pub fn middle(&self) -> Steps {
        Steps(self.usable().0 / 2)
    }

    /// Absolute position of the rail center (`left + usable / 2`).
    #[inline]
    pub fn center(&self) -> Steps {
        self.left + self.middle()
    }

    /// Check if a position is within the bounds.
    #[inline]
    pub fn contains(&self, position: Steps) -> bool {
        position >= self.left && position <= self.right
    }

    /// Clamp a target into the bounds.
    #[inline]
    pub fn clamp(&self, target: Steps) -> Steps {
        target.clamp(self.left, self.right)
    }
}
