//! Limit-switch safety interlock.

use embedded_hal::digital::{InputPin, OutputPin};

use crate::error::{MotorError, Result};
use crate::motion::Direction;

use super::limit::LimitSwitch;

/// Decides whether another step in a given direction is allowed.
///
/// Only the switch at the end being approached matters: a carriage resting on
/// the left switch may still move right. A denial lights the fault indicator;
/// the next allowed step clears it.
pub struct SafetyMonitor<LEFT, RIGHT, FAULT>
where
    LEFT: InputPin,
    RIGHT: InputPin,
    FAULT: OutputPin,
{
    left: LimitSwitch<LEFT>,
    right: LimitSwitch<RIGHT>,
    fault_pin: FAULT,
}

impl<LEFT, RIGHT, FAULT> SafetyMonitor<LEFT, RIGHT, FAULT>
where
    LEFT: InputPin,
    RIGHT: InputPin,
    FAULT: OutputPin,
{
    /// Create a monitor from the two switches and the fault indicator.
    pub fn new(left: LimitSwitch<LEFT>, right: LimitSwitch<RIGHT>, fault_pin: FAULT) -> Self {
        Self {
            left,
            right,
            fault_pin,
        }
    }

    /// Sample the switch at the `side` end.
    pub fn at_limit(&mut self, side: Direction) -> Result<bool> {
        match side {
            Direction::Left => self.left.is_triggered(),
            Direction::Right => self.right.is_triggered(),
        }
    }

    /// Check whether one more step toward `direction` is allowed.
    pub fn is_safe(&mut self, direction: Direction) -> Result<bool> {
        if self.at_limit(direction)? {
            self.fault_pin.set_high().map_err(|_| MotorError::PinError)?;
            warn!("limit reached moving {}", direction.as_str());
            return Ok(false);
        }
        self.fault_pin.set_low().map_err(|_| MotorError::PinError)?;
        Ok(true)
    }

    /// Turn the fault indicator off.
    pub fn clear_fault(&mut self) -> Result<()> {
        self.fault_pin.set_low().map_err(|_| MotorError::PinError)?;
        Ok(())
    }
}
