//! Drive a simulated rail with protocol lines.
//!
//! ```text
//! cargo run --example rail_bench -- [rail.toml] < script.txt
//! ```
//!
//! Each line of stdin is parsed as a command and the reply is printed, the
//! way the firmware answers the host over serial. Without input a short
//! homing-and-move script runs instead.

use std::cell::Cell;
use std::convert::Infallible;
use std::io::{self, BufRead, IsTerminal};
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use rail_motion::{load_config, AbortToken, Command, LinearRail, RailConfig, Response};

static ABORT: AbortToken = AbortToken::new();

const DEFAULT_SCRIPT: &[&str] = &[
    "GET_POS",
    "HOME_TO_CENTER",
    "GET_POS",
    "MOVE_TO 150000",
    "MOVE_LEFT 1000",
    "GET_POS",
    "MEASURE_RAIL",
    "JOG 5",
];

/// Carriage position and direction shared by the simulated pins.
#[derive(Default)]
struct Rig {
    carriage: Cell<i64>,
    length: i64,
    left: Cell<bool>,
    step: Cell<bool>,
    elapsed_us: Cell<u64>,
}

struct Step(Rc<Rig>);
struct Dir(Rc<Rig>);
struct Led;
struct LeftEnd(Rc<Rig>);
struct RightEnd(Rc<Rig>);
struct Clock(Rc<Rig>);

impl ErrorType for Step {
    type Error = Infallible;
}

impl OutputPin for Step {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.step.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        let rig = &self.0;
        if !rig.step.replace(true) {
            let delta = if rig.left.get() { -1 } else { 1 };
            rig.carriage.set(rig.carriage.get() + delta);
        }
        Ok(())
    }
}

impl ErrorType for Dir {
    type Error = Infallible;
}

impl OutputPin for Dir {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.left.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0.left.set(true);
        Ok(())
    }
}

impl ErrorType for Led {
    type Error = Infallible;
}

impl OutputPin for Led {
    fn set_low(&mut self) -> Result<(), Infallible> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}

impl ErrorType for LeftEnd {
    type Error = Infallible;
}

impl InputPin for LeftEnd {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.0.carriage.get() > 0)
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(self.0.carriage.get() <= 0)
    }
}

impl ErrorType for RightEnd {
    type Error = Infallible;
}

impl InputPin for RightEnd {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.0.carriage.get() < self.0.length)
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(self.0.carriage.get() >= self.0.length)
    }
}

impl DelayNs for Clock {
    fn delay_ns(&mut self, ns: u32) {
        let rig = &self.0;
        rig.elapsed_us.set(rig.elapsed_us.get() + (ns / 1_000) as u64);
    }

    fn delay_us(&mut self, us: u32) {
        let rig = &self.0;
        rig.elapsed_us.set(rig.elapsed_us.get() + us as u64);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(path)?,
        None => RailConfig::default(),
    };

    let rig = Rc::new(Rig {
        carriage: Cell::new(config.travel.total_steps.0 / 3),
        length: config.travel.total_steps.0,
        ..Rig::default()
    });

    let mut rail = LinearRail::builder()
        .config(config)
        .step_pin(Step(rig.clone()))
        .dir_pin(Dir(rig.clone()))
        .fault_pin(Led)
        .left_switch(LeftEnd(rig.clone()))
        .right_switch(RightEnd(rig.clone()))
        .delay(Clock(rig.clone()))
        .abort(&ABORT)
        .build()?;

    let stdin = io::stdin();
    let lines: Vec<String> = if stdin.is_terminal() {
        DEFAULT_SCRIPT.iter().map(|s| s.to_string()).collect()
    } else {
        stdin.lock().lines().collect::<Result<_, _>>()?
    };

    for line in lines.iter().filter(|l| !l.trim().is_empty()) {
        let started = rig.elapsed_us.get();
        let reply = match line.parse::<Command>() {
            Ok(command) => rail.execute(command)?,
            Err(e) => Response::from(e),
        };
        let took_ms = (rig.elapsed_us.get() - started) as f64 / 1_000.0;

        println!("> {}", line.trim());
        println!("{}    ({:.1} ms simulated)", reply, took_ms);
    }

    Ok(())
}
