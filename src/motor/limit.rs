//! End-of-travel switches.

use embedded_hal::digital::InputPin;

use crate::error::{MotorError, Result};

/// A limit switch on an input pin.
///
/// Switches are wired active-low by default: the input is pulled up and the
/// switch pulls it low when the carriage reaches that end.
pub struct LimitSwitch<P>
where
    P: InputPin,
{
    pin: P,
    active_low: bool,
}

impl<P> LimitSwitch<P>
where
    P: InputPin,
{
    /// Wrap an active-low switch.
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            active_low: true,
        }
    }

    /// Wrap an active-high switch.
    pub fn active_high(pin: P) -> Self {
        Self {
            pin,
            active_low: false,
        }
    }

    /// Sample the switch; `true` means the carriage is at this end.
    pub fn is_triggered(&mut self) -> Result<bool> {
        let low = self.pin.is_low().map_err(|_| MotorError::SensorError)?;
        Ok(low == self.active_low)
    }
}
