//! Simulated rail bench for integration tests.
//!
//! A carriage on a rail of `rail_length` steps, left switch at 0 and right
//! switch at `rail_length`, both active-low. The STEP line moves the carriage
//! on each rising edge, DIR high means left. Delays advance a simulated clock
//! instead of sleeping.

#![allow(dead_code)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};
use rail_motion::{AbortToken, LinearRail, RailConfig};

/// Physical rail length used by the measured rig.
pub const RIG_LENGTH: i64 = 184_245;

#[derive(Debug, Default)]
pub struct Bench {
    /// Physical carriage position, 0 = left switch.
    pub carriage: i64,
    pub rail_length: i64,

    pub dir_high: bool,
    pub dir_writes: usize,

    pub step_high: bool,
    pub pulses: usize,
    /// Pulses emitted while the switch ahead was already pressed.
    pub unsafe_pulses: usize,

    pub fault_lit: bool,
    pub fault_raised: usize,

    /// Simulated clock in microseconds.
    pub now_us: u64,
    last_rise_us: Option<u64>,
    /// Rising edge to rising edge, one entry per pulse after the first.
    pub periods_us: Vec<u64>,
    /// Every requested delay, in call order.
    pub delays_us: Vec<u32>,

    /// Raise the abort token once this many pulses have been emitted.
    pub abort_after: Option<(usize, &'static AbortToken)>,

    /// Left switch never closes (wire cut).
    pub left_disconnected: bool,
    /// Right switch reads pressed wherever the carriage is.
    pub right_stuck: bool,
    /// Right switch read fails.
    pub right_broken: bool,
}

impl Bench {
    pub fn left_pressed(&self) -> bool {
        !self.left_disconnected && self.carriage <= 0
    }

    pub fn right_pressed(&self) -> bool {
        self.right_stuck || self.carriage >= self.rail_length
    }

    fn moving_left(&self) -> bool {
        self.dir_high
    }

    fn rise(&mut self) {
        let blocked = if self.moving_left() {
            self.left_pressed()
        } else {
            self.right_pressed()
        };
        if blocked {
            self.unsafe_pulses += 1;
        }

        self.carriage += if self.moving_left() { -1 } else { 1 };
        self.pulses += 1;

        if let Some(last) = self.last_rise_us {
            self.periods_us.push(self.now_us - last);
        }
        self.last_rise_us = Some(self.now_us);

        if let Some((count, token)) = self.abort_after {
            if self.pulses == count {
                token.request();
            }
        }
    }

    fn wait(&mut self, us: u32) {
        self.delays_us.push(us);
        self.now_us += us as u64;
    }
}

pub type Shared = Rc<RefCell<Bench>>;

pub fn bench(rail_length: i64, carriage: i64) -> Shared {
    Rc::new(RefCell::new(Bench {
        carriage,
        rail_length,
        ..Bench::default()
    }))
}

pub struct StepPin(pub Shared);
pub struct DirPin(pub Shared);
pub struct FaultPin(pub Shared);
pub struct LeftSwitch(pub Shared);
pub struct RightSwitch(pub Shared);
pub struct BenchDelay(pub Shared);

impl ErrorType for StepPin {
    type Error = Infallible;
}

impl OutputPin for StepPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().step_high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mut bench = self.0.borrow_mut();
        if !bench.step_high {
            bench.step_high = true;
            bench.rise();
        }
        Ok(())
    }
}

impl ErrorType for DirPin {
    type Error = Infallible;
}

impl OutputPin for DirPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        let mut bench = self.0.borrow_mut();
        bench.dir_high = false;
        bench.dir_writes += 1;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mut bench = self.0.borrow_mut();
        bench.dir_high = true;
        bench.dir_writes += 1;
        Ok(())
    }
}

impl ErrorType for FaultPin {
    type Error = Infallible;
}

impl OutputPin for FaultPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().fault_lit = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mut bench = self.0.borrow_mut();
        if !bench.fault_lit {
            bench.fault_raised += 1;
        }
        bench.fault_lit = true;
        Ok(())
    }
}

impl ErrorType for LeftSwitch {
    type Error = Infallible;
}

impl InputPin for LeftSwitch {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0.borrow().left_pressed())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.borrow().left_pressed())
    }
}

impl ErrorType for RightSwitch {
    type Error = ErrorKind;
}

impl InputPin for RightSwitch {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.is_low().map(|low| !low)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        let bench = self.0.borrow();
        if bench.right_broken {
            return Err(ErrorKind::Other);
        }
        Ok(bench.right_pressed())
    }
}

/// Left switch wired to pull high when pressed.
pub struct LeftSwitchHigh(pub Shared);
/// Right switch wired to pull high when pressed.
pub struct RightSwitchHigh(pub Shared);

impl ErrorType for LeftSwitchHigh {
    type Error = Infallible;
}

impl InputPin for LeftSwitchHigh {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.borrow().left_pressed())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0.borrow().left_pressed())
    }
}

impl ErrorType for RightSwitchHigh {
    type Error = Infallible;
}

impl InputPin for RightSwitchHigh {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.borrow().right_pressed())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0.borrow().right_pressed())
    }
}

impl DelayNs for BenchDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().wait(ns / 1_000);
    }

    fn delay_us(&mut self, us: u32) {
        self.0.borrow_mut().wait(us);
    }
}

pub type TestRail =
    LinearRail<'static, StepPin, DirPin, LeftSwitch, RightSwitch, FaultPin, BenchDelay>;

/// A fresh abort token that outlives the rail.
pub fn token() -> &'static AbortToken {
    Box::leak(Box::new(AbortToken::new()))
}

pub fn rail(bench: &Shared, config: RailConfig, abort: &'static AbortToken) -> TestRail {
    LinearRail::builder()
        .config(config)
        .step_pin(StepPin(bench.clone()))
        .dir_pin(DirPin(bench.clone()))
        .left_switch(LeftSwitch(bench.clone()))
        .right_switch(RightSwitch(bench.clone()))
        .fault_pin(FaultPin(bench.clone()))
        .delay(BenchDelay(bench.clone()))
        .abort(abort)
        .build()
        .expect("bench rail should build")
}

/// Rig-sized rail with the carriage parked at `carriage`.
///
/// `0` leaves the rail at its power-on position; anything else must lie
/// within the travel bounds and is synced with `set_position`.
pub fn rig_at(carriage: i64) -> (Shared, TestRail, &'static AbortToken) {
    let bench = bench(RIG_LENGTH, carriage);
    let abort = token();
    let mut rail = rail(&bench, RailConfig::default(), abort);
    if carriage != 0 {
        rail.set_position(rail_motion::Steps(carriage));
    }
    reset_counters(&bench);
    (bench, rail, abort)
}

/// Forget pulses, delays and DIR writes recorded so far.
pub fn reset_counters(bench: &Shared) {
    let mut b = bench.borrow_mut();
    b.pulses = 0;
    b.unsafe_pulses = 0;
    b.dir_writes = 0;
    b.fault_raised = 0;
    b.delays_us.clear();
    b.periods_us.clear();
    b.last_rise_us = None;
}
