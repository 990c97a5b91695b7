//! Motor module for rail-motion.
//!
//! Provides the rail driver, its hardware-facing parts (pulse emitter, limit
//! switches, safety monitor) and the homing sequence.

mod builder;
mod driver;
mod homing;
mod limit;
mod position;
mod pulse;
mod safety;

pub use builder::LinearRailBuilder;
pub use driver::{LinearRail, MoveOutcome, MoveReport};
pub use homing::{CenteringReport, HomingHalt, HomingPhase, HomingReport, RailMeasurement};
pub use limit::LimitSwitch;
pub use position::PositionTracker;
pub use pulse::{PulseEmitter, PulseKind};
pub use safety::SafetyMonitor;
