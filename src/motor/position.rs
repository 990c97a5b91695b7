//! Position tracking for the rail.
//!
//! The tracker is the only owner of the current absolute position. Regular
//! moves change it one step at a time through [`PositionTracker::advance`];
//! homing and manual overrides replace it through
//! [`PositionTracker::set_absolute`].

use crate::config::units::Steps;
use crate::config::TravelLimits;
use crate::motion::Direction;

/// Rail position tracker.
#[derive(Debug, Clone, Copy)]
pub struct PositionTracker {
    /// Current position in steps.
    current: Steps,
    /// Legal range for targets and absolute assignments.
    limits: TravelLimits,
}

impl PositionTracker {
    /// Create a tracker at the power-on position `0`.
    ///
    /// `0` is below the left bound and means "not referenced yet".
    #[inline]
    pub fn new(limits: TravelLimits) -> Self {
        Self {
            current: Steps::ZERO,
            limits,
        }
    }

    /// Create a tracker at a specific position, without clamping.
    #[inline]
    pub fn at(current: Steps, limits: TravelLimits) -> Self {
        Self { current, limits }
    }

    /// Get current position in steps.
    #[inline]
    pub fn current(&self) -> Steps {
        self.current
    }

    /// Get the travel bounds.
    #[inline]
    pub fn limits(&self) -> TravelLimits {
        self.limits
    }

    /// Constrain a requested target into the travel bounds.
    #[inline]
    pub fn clamp(&self, target: Steps) -> Steps {
        self.limits.clamp(target)
    }

    /// Record one emitted step in `direction`.
    #[inline]
    pub fn advance(&mut self, direction: Direction) {
        self.current = Steps(self.current.0 + direction.sign());
    }

    /// Overwrite the position with a clamped value and return it.
    #[inline]
    pub fn set_absolute(&mut self, value: Steps) -> Steps {
        self.current = self.clamp(value);
        self.current
    }

    /// Steps left before the bound in `direction` (never negative).
    pub fn room_toward(&self, direction: Direction) -> u64 {
        let room = match direction {
            Direction::Left => self.current.0 - self.limits.left.0,
            Direction::Right => self.limits.right.0 - self.current.0,
        };
        room.max(0) as u64
    }
}
