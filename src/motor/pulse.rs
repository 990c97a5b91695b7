//! Step pulse generation.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::units::Microseconds;
use crate::error::{MotorError, Result};

/// Which pulse width to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PulseKind {
    /// Regular moves.
    Motion,
    /// Limit seeking and backoff (shorter pulse).
    Homing,
}

/// Drives the STEP line with timed pulses.
///
/// A period passed to [`PulseEmitter::emit`] runs from the rising edge of one
/// pulse to the rising edge of the next: the pulse width is part of it.
pub struct PulseEmitter<STEP, DELAY>
where
    STEP: OutputPin,
    DELAY: DelayNs,
{
    step_pin: STEP,
    delay: DELAY,
    motion_width: Microseconds,
    homing_width: Microseconds,
}

impl<STEP, DELAY> PulseEmitter<STEP, DELAY>
where
    STEP: OutputPin,
    DELAY: DelayNs,
{
    /// Create an emitter with the two pulse widths.
    pub fn new(
        step_pin: STEP,
        delay: DELAY,
        motion_width: Microseconds,
        homing_width: Microseconds,
    ) -> Self {
        Self {
            step_pin,
            delay,
            motion_width,
            homing_width,
        }
    }

    /// Pulse width used for `kind`.
    #[inline]
    pub fn width(&self, kind: PulseKind) -> Microseconds {
        match kind {
            PulseKind::Motion => self.motion_width,
            PulseKind::Homing => self.homing_width,
        }
    }

    /// Emit one step and wait out the rest of `period`.
    pub fn emit(&mut self, period: Microseconds, kind: PulseKind) -> Result<()> {
        let width = self.width(kind);

        self.step_pin.set_high().map_err(|_| MotorError::PinError)?;
        self.delay.delay_us(width.0);
        self.step_pin.set_low().map_err(|_| MotorError::PinError)?;

        let gap = period.saturating_sub(width);
        if gap.0 > 0 {
            self.delay.delay_us(gap.0);
        }
        Ok(())
    }

    /// Idle for `duration` without pulsing.
    pub fn pause(&mut self, duration: Microseconds) {
        if duration.0 > 0 {
            self.delay.delay_us(duration.0);
        }
    }

    /// Force the STEP line low.
    pub fn release(&mut self) -> Result<()> {
        self.step_pin.set_low().map_err(|_| MotorError::PinError)?;
        Ok(())
    }
}
