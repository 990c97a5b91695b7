//! Homing: seek a physical limit, back off, and re-establish the reference.
//!
//! ```text
//! SeekLeft ──contact──▶ BackoffLeft ──end_buffer steps──▶ Done (position = left limit)
//! SeekRight ─contact──▶ BackoffRight ─end_buffer steps──▶ Done (position = right limit)
//! ```
//!
//! A report whose phase is not [`HomingPhase::Done`] means the reference was
//! not established; the position keeps counting raw steps and the rail is
//! marked unreferenced.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::config::units::Steps;
use crate::error::Result;
use crate::motion::Direction;

use super::driver::{LinearRail, MoveReport};
use super::pulse::PulseKind;

/// Homing state machine phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HomingPhase {
    /// Driving toward the left switch.
    SeekLeft,
    /// Stepping right, away from the left switch.
    BackoffLeft,
    /// Driving toward the right switch.
    SeekRight,
    /// Stepping left, away from the right switch.
    BackoffRight,
    /// Reference established.
    Done,
}

impl HomingPhase {
    fn seek(side: Direction) -> Self {
        match side {
            Direction::Left => HomingPhase::SeekLeft,
            Direction::Right => HomingPhase::SeekRight,
        }
    }

    fn backoff(side: Direction) -> Self {
        match side {
            Direction::Left => HomingPhase::BackoffLeft,
            Direction::Right => HomingPhase::BackoffRight,
        }
    }
}

/// Why a homing sequence stopped before [`HomingPhase::Done`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HomingHalt {
    /// The opposite switch tripped during backoff.
    Blocked,
    /// The abort token was raised.
    Aborted,
    /// The seek ran out of steps without finding the switch.
    SeekCeiling,
}

/// Result of one seek sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HomingReport {
    /// Limit being sought.
    pub side: Direction,
    /// Phase reached; [`HomingPhase::Done`] on success.
    pub phase: HomingPhase,
    /// Reason for stopping early, `None` on success.
    pub halt: Option<HomingHalt>,
    /// Steps taken before the switch made contact.
    pub seek_steps: u64,
    /// Steps taken backing off the switch.
    pub backoff_steps: u64,
}

impl HomingReport {
    /// Check if the reference was established.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.phase == HomingPhase::Done
    }
}

/// Result of [`LinearRail::home_to_center`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CenteringReport {
    /// Left seek sequence.
    pub homing: HomingReport,
    /// Move to the center, if homing succeeded.
    pub travel: Option<MoveReport>,
}

impl CenteringReport {
    /// Check if the rail is homed and at the center.
    pub fn is_complete(&self) -> bool {
        self.homing.is_complete() && self.travel.is_some_and(|m| m.is_complete())
    }
}

/// Result of [`LinearRail::measure_rail`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RailMeasurement {
    /// Left seek sequence.
    pub left: HomingReport,
    /// Right seek sequence, if the left one succeeded.
    pub right: Option<HomingReport>,
    /// Measured switch-to-switch travel, if both succeeded.
    pub total_steps: Option<Steps>,
}

impl<'a, STEP, DIR, LEFT, RIGHT, FAULT, DELAY> LinearRail<'a, STEP, DIR, LEFT, RIGHT, FAULT, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    LEFT: InputPin,
    RIGHT: InputPin,
    FAULT: OutputPin,
    DELAY: DelayNs,
{
    /// Find the left switch and set the position to the left limit.
    pub fn seek_left(&mut self) -> Result<HomingReport> {
        self.seek(Direction::Left)
    }

    /// Find the right switch and set the position to the right limit.
    pub fn seek_right(&mut self) -> Result<HomingReport> {
        self.seek(Direction::Right)
    }

    /// Home against the left switch, then move to the middle of the travel.
    pub fn home_to_center(&mut self) -> Result<CenteringReport> {
        self.safety.clear_fault()?;

        let homing = self.seek_left()?;
        if !homing.is_complete() {
            return Ok(CenteringReport {
                homing,
                travel: None,
            });
        }

        let center = self.tracker.limits().center();
        info!("centering to {}", center);
        let travel = self.move_to(center)?;

        Ok(CenteringReport {
            homing,
            travel: Some(travel),
        })
    }

    /// Seek both switches and report the physical travel between them.
    ///
    /// The configuration is not changed. On success the rail ends at the
    /// right limit.
    pub fn measure_rail(&mut self) -> Result<RailMeasurement> {
        let left = self.seek_left()?;
        if !left.is_complete() {
            return Ok(RailMeasurement {
                left,
                right: None,
                total_steps: None,
            });
        }

        let right = self.seek_right()?;
        let total_steps = right.is_complete().then(|| {
            Steps(self.config.travel.end_buffer.0 + right.seek_steps as i64)
        });

        if let Some(total) = total_steps {
            info!("measured travel {} steps", total);
        }

        Ok(RailMeasurement {
            left,
            right: Some(right),
            total_steps,
        })
    }

    fn seek(&mut self, side: Direction) -> Result<HomingReport> {
        let mut report = HomingReport {
            side,
            phase: HomingPhase::seek(side),
            halt: None,
            seek_steps: 0,
            backoff_steps: 0,
        };

        let ceiling = self.config.seek_ceiling();
        let seek_delay = self.config.homing.seek_delay;
        let backoff_delay = self.config.homing.backoff_delay;

        info!("seeking {} limit", side.as_str());
        self.write_direction(side)?;

        // Contact is the switch ahead reporting unsafe.
        loop {
            if self.take_abort()? {
                return self.fail(report, HomingHalt::Aborted);
            }
            if !self.safety.is_safe(side)? {
                break;
            }
            if report.seek_steps >= ceiling {
                return self.fail(report, HomingHalt::SeekCeiling);
            }
            self.pulse.emit(seek_delay, PulseKind::Homing)?;
            self.tracker.advance(side);
            report.seek_steps += 1;
        }

        self.safety.clear_fault()?;
        debug!("{} contact after {} steps", side.as_str(), report.seek_steps);

        report.phase = HomingPhase::backoff(side);
        let away = side.opposite();
        let buffer = self.config.travel.end_buffer.0.max(0) as u64;
        self.write_direction(away)?;

        while report.backoff_steps < buffer {
            if self.take_abort()? {
                return self.fail(report, HomingHalt::Aborted);
            }
            if !self.safety.is_safe(away)? {
                return self.fail(report, HomingHalt::Blocked);
            }
            self.pulse.emit(backoff_delay, PulseKind::Homing)?;
            self.tracker.advance(away);
            report.backoff_steps += 1;
        }

        if self.take_abort()? {
            return self.fail(report, HomingHalt::Aborted);
        }

        let limits = self.tracker.limits();
        let reference = match side {
            Direction::Left => limits.left,
            Direction::Right => limits.right,
        };
        self.tracker.set_absolute(reference);
        self.referenced = true;
        report.phase = HomingPhase::Done;

        info!("{} limit referenced at {}", side.as_str(), reference);
        Ok(report)
    }

    fn take_abort(&mut self) -> Result<bool> {
        if self.abort.consume() {
            self.pulse.release()?;
            return Ok(true);
        }
        Ok(false)
    }

    fn fail(&mut self, mut report: HomingReport, halt: HomingHalt) -> Result<HomingReport> {
        report.halt = Some(halt);
        self.referenced = false;
        warn!(
            "homing {} stopped in {} after {} + {} steps",
            report.side.as_str(),
            report.phase,
            report.seek_steps,
            report.backoff_steps
        );
        Ok(report)
    }
}
