//! Builder pattern for LinearRail.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::config::{validate_config, RailConfig};
use crate::error::{ConfigError, Error, Result};
use crate::motion::AbortToken;

use super::driver::LinearRail;
use super::limit::LimitSwitch;
use super::pulse::PulseEmitter;
use super::safety::SafetyMonitor;

/// Builder for creating LinearRail instances.
pub struct LinearRailBuilder<'a, STEP, DIR, LEFT, RIGHT, FAULT, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    LEFT: InputPin,
    RIGHT: InputPin,
    FAULT: OutputPin,
    DELAY: DelayNs,
{
    step_pin: Option<STEP>,
    dir_pin: Option<DIR>,
    left_switch: Option<LimitSwitch<LEFT>>,
    right_switch: Option<LimitSwitch<RIGHT>>,
    fault_pin: Option<FAULT>,
    delay: Option<DELAY>,
    abort: Option<&'a AbortToken>,
    config: RailConfig,
}

impl<'a, STEP, DIR, LEFT, RIGHT, FAULT, DELAY> Default
    for LinearRailBuilder<'a, STEP, DIR, LEFT, RIGHT, FAULT, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    LEFT: InputPin,
    RIGHT: InputPin,
    FAULT: OutputPin,
    DELAY: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, STEP, DIR, LEFT, RIGHT, FAULT, DELAY> LinearRailBuilder<'a, STEP, DIR, LEFT, RIGHT, FAULT, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    LEFT: InputPin,
    RIGHT: InputPin,
    FAULT: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new builder with the default rig configuration.
    pub fn new() -> Self {
        Self {
            step_pin: None,
            dir_pin: None,
            left_switch: None,
            right_switch: None,
            fault_pin: None,
            delay: None,
            abort: None,
            config: RailConfig::default(),
        }
    }

    /// Set the STEP pin.
    pub fn step_pin(mut self, pin: STEP) -> Self {
        self.step_pin = Some(pin);
        self
    }

    /// Set the DIR pin.
    pub fn dir_pin(mut self, pin: DIR) -> Self {
        self.dir_pin = Some(pin);
        self
    }

    /// Set the left limit switch input (active-low).
    pub fn left_switch(mut self, pin: LEFT) -> Self {
        self.left_switch = Some(LimitSwitch::new(pin));
        self
    }

    /// Set the right limit switch input (active-low).
    pub fn right_switch(mut self, pin: RIGHT) -> Self {
        self.right_switch = Some(LimitSwitch::new(pin));
        self
    }

    /// Set the left limit switch with explicit polarity.
    pub fn left_limit(mut self, switch: LimitSwitch<LEFT>) -> Self {
        self.left_switch = Some(switch);
        self
    }

    /// Set the right limit switch with explicit polarity.
    pub fn right_limit(mut self, switch: LimitSwitch<RIGHT>) -> Self {
        self.right_switch = Some(switch);
        self
    }

    /// Set the fault indicator pin.
    pub fn fault_pin(mut self, pin: FAULT) -> Self {
        self.fault_pin = Some(pin);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the abort token polled during moves and homing.
    pub fn abort(mut self, token: &'a AbortToken) -> Self {
        self.abort = Some(token);
        self
    }

    /// Set the rail configuration.
    pub fn config(mut self, config: RailConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the LinearRail.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin, the delay or the abort token is missing, or
    /// if the configuration fails validation.
    pub fn build(self) -> Result<LinearRail<'a, STEP, DIR, LEFT, RIGHT, FAULT, DELAY>> {
        validate_config(&self.config)?;

        let step_pin = self.step_pin.ok_or(missing("step_pin"))?;
        let dir_pin = self.dir_pin.ok_or(missing("dir_pin"))?;
        let left = self.left_switch.ok_or(missing("left_switch"))?;
        let right = self.right_switch.ok_or(missing("right_switch"))?;
        let fault_pin = self.fault_pin.ok_or(missing("fault_pin"))?;
        let delay = self.delay.ok_or(missing("delay"))?;
        let abort = self.abort.ok_or(missing("abort"))?;

        let pulse = PulseEmitter::new(
            step_pin,
            delay,
            self.config.motion.pulse_width,
            self.config.homing.pulse_width,
        );
        let safety = SafetyMonitor::new(left, right, fault_pin);

        Ok(LinearRail::new(pulse, dir_pin, safety, self.config, abort))
    }
}

fn missing(part: &'static str) -> Error {
    Error::Config(ConfigError::MissingPart(part))
}
