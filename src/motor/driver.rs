//! Linear rail driver.
//!
//! Generic over embedded-hal 1.0 pin types. Every move is blocking and runs
//! until it completes, hits the limit ahead of it, or is aborted.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::config::units::Steps;
use crate::config::{RailConfig, TravelLimits};
use crate::error::{MotorError, Result};
use crate::motion::{AbortToken, Direction, EasedProfile, MotionExecutor};

use super::builder::LinearRailBuilder;
use super::position::PositionTracker;
use super::pulse::{PulseEmitter, PulseKind};
use super::safety::SafetyMonitor;

/// How a move ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MoveOutcome {
    /// Every planned step was emitted.
    Completed,
    /// The limit switch ahead of the carriage stopped the move.
    Blocked,
    /// The abort token was raised before or during the move.
    Aborted,
}

/// Result of one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MoveReport {
    /// Direction the DIR line was set to.
    pub direction: Direction,
    /// Clamped target position.
    pub target: Steps,
    /// Steps the move needed after clamping.
    pub planned: u32,
    /// Steps actually emitted.
    pub executed: u32,
    /// How the move ended.
    pub outcome: MoveOutcome,
}

impl MoveReport {
    /// Check if the move ran to its target.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.outcome == MoveOutcome::Completed
    }
}

/// Single-axis linear rail.
///
/// Generic over:
/// - `STEP`, `DIR`: step and direction outputs
/// - `LEFT`, `RIGHT`: limit switch inputs (active-low)
/// - `FAULT`: fault indicator output
/// - `DELAY`: microsecond delay provider
pub struct LinearRail<'a, STEP, DIR, LEFT, RIGHT, FAULT, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    LEFT: InputPin,
    RIGHT: InputPin,
    FAULT: OutputPin,
    DELAY: DelayNs,
{
    pub(super) pulse: PulseEmitter<STEP, DELAY>,
    pub(super) dir_pin: DIR,
    pub(super) safety: SafetyMonitor<LEFT, RIGHT, FAULT>,
    pub(super) tracker: PositionTracker,
    pub(super) config: RailConfig,
    pub(super) abort: &'a AbortToken,
    /// Set by a completed homing, cleared by a failed one.
    pub(super) referenced: bool,
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
    /// Start building a rail.
    pub fn builder() -> LinearRailBuilder<'a, STEP, DIR, LEFT, RIGHT, FAULT, DELAY> {
        LinearRailBuilder::new()
    }

    /// Create a rail from validated parts.
    pub(crate) fn new(
        pulse: PulseEmitter<STEP, DELAY>,
        dir_pin: DIR,
        safety: SafetyMonitor<LEFT, RIGHT, FAULT>,
        config: RailConfig,
        abort: &'a AbortToken,
    ) -> Self {
        Self {
            pulse,
            dir_pin,
            safety,
            tracker: PositionTracker::new(config.limits()),
            config,
            abort,
            referenced: false,
        }
    }

    /// Get current position in steps.
    #[inline]
    pub fn position(&self) -> Steps {
        self.tracker.current()
    }

    /// Get the buffered travel bounds.
    #[inline]
    pub fn limits(&self) -> TravelLimits {
        self.tracker.limits()
    }

    /// Check whether the position has been established by homing.
    #[inline]
    pub fn is_referenced(&self) -> bool {
        self.referenced
    }

    /// Get the configuration.
    #[inline]
    pub fn config(&self) -> &RailConfig {
        &self.config
    }

    /// Get the abort token this rail polls.
    #[inline]
    pub fn abort_token(&self) -> &'a AbortToken {
        self.abort
    }

    /// Overwrite the position (clamped into the travel bounds).
    ///
    /// Returns the position actually stored.
    pub fn set_position(&mut self, position: Steps) -> Steps {
        let stored = self.tracker.set_absolute(position);
        info!("position set to {}", stored);
        stored
    }

    /// Force the STEP line low and drop any pending abort request.
    ///
    /// Used when a stop arrives while no move is running.
    pub fn stop(&mut self) -> Result<()> {
        if self.abort.consume() {
            debug!("dropped pending abort");
        }
        self.pulse.release()
    }

    /// Move to an absolute position.
    ///
    /// Targets outside the travel bounds are clamped, never rejected.
    pub fn move_to(&mut self, target: Steps) -> Result<MoveReport> {
        let current = self.tracker.current();
        let target = self.tracker.clamp(target);
        let direction = Direction::toward(current, target);
        let planned = saturate(current.distance_to(target));

        self.run(direction, target, planned)
    }

    /// Move `steps` in `direction`, stopping at the travel bound.
    pub fn move_by(&mut self, steps: u32, direction: Direction) -> Result<MoveReport> {
        let current = self.tracker.current();
        let planned = saturate(self.tracker.room_toward(direction).min(steps as u64));
        let target = Steps(current.0 + direction.sign() * planned as i64);

        self.run(direction, target, planned)
    }

    fn run(&mut self, direction: Direction, target: Steps, planned: u32) -> Result<MoveReport> {
        self.write_direction(direction)?;

        let mut report = MoveReport {
            direction,
            target,
            planned,
            executed: 0,
            outcome: MoveOutcome::Completed,
        };

        let profile = EasedProfile::new(planned, direction, &self.config.motion);
        let mut executor = MotionExecutor::new(profile);

        info!("move {} {} steps to {}", direction.as_str(), planned, target);

        while !executor.is_complete() {
            if self.abort.consume() {
                self.pulse.release()?;
                report.outcome = MoveOutcome::Aborted;
                break;
            }
            if !self.safety.is_safe(direction)? {
                report.outcome = MoveOutcome::Blocked;
                break;
            }

            let period = executor.current_delay();
            let pause = executor.current_pause();

            self.pulse.emit(period, PulseKind::Motion)?;
            self.tracker.advance(direction);
            report.executed += 1;

            executor.advance();
            self.pulse.pause(pause);
        }

        // A request raised during the final pulse, or before a zero-step
        // move, still belongs to this call.
        if self.abort.consume() {
            self.pulse.release()?;
            report.outcome = MoveOutcome::Aborted;
        }

        match report.outcome {
            MoveOutcome::Completed => debug!("move complete at {}", self.tracker.current()),
            MoveOutcome::Blocked => warn!(
                "move blocked after {}/{} steps at {}",
                report.executed,
                planned,
                self.tracker.current()
            ),
            MoveOutcome::Aborted => warn!(
                "move aborted after {}/{} steps at {}",
                report.executed,
                planned,
                self.tracker.current()
            ),
        }

        Ok(report)
    }

    /// Set the DIR line for `direction`.
    pub(super) fn write_direction(&mut self, direction: Direction) -> Result<()> {
        let high = direction.pin_high(self.config.travel.invert_direction);
        if high {
            self.dir_pin.set_high().map_err(|_| MotorError::PinError)?;
        } else {
            self.dir_pin.set_low().map_err(|_| MotorError::PinError)?;
        }
        Ok(())
    }
}

#[inline]
fn saturate(steps: u64) -> u32 {
    u32::try_from(steps).unwrap_or(u32::MAX)
}
