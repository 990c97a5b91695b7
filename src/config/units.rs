//! Unit types for rail quantities.
//!
//! Positions and step counts are [`Steps`]; pulse periods, pulse widths and
//! pauses are [`Microseconds`]. Keeping them apart stops a delay from being
//! added to a position by accident.

use core::ops::{Add, Sub};

use serde::Deserialize;

/// Rail position or distance in motor steps.
///
/// Signed so a position below the left bound (the power-on value `0` sits
/// below it) is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Steps(pub i64);

impl Steps {
    /// Zero steps.
    pub const ZERO: Self = Self(0);

    /// Create a new Steps value.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Unsigned distance between two positions.
    #[inline]
    pub const fn distance_to(self, other: Steps) -> u64 {
        self.0.abs_diff(other.0)
    }

    /// Constrain into `[min, max]`.
    #[inline]
    pub fn clamp(self, min: Steps, max: Steps) -> Steps {
        Steps(self.0.clamp(min.0, max.0))
    }
}

impl Add for Steps {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Steps {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Time span in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Microseconds(pub u32);

impl Microseconds {
    /// Zero microseconds.
    pub const ZERO: Self = Self(0);

    /// Create a new Microseconds value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Subtract, stopping at zero.
    #[inline]
    pub const fn saturating_sub(self, rhs: Microseconds) -> Microseconds {
        Microseconds(self.0.saturating_sub(rhs.0))
    }
}

impl Add for Microseconds {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}
