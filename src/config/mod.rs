//! Configuration module for rail-motion.
//!
//! Provides types for loading and validating the rail geometry, step timing and
//! homing parameters from TOML files (with `std` feature) or from code.

mod homing;
mod limits;
mod motion;
mod system;
mod travel;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use homing::HomingConfig;
pub use limits::TravelLimits;
pub use motion::{MotionTiming, ResonanceBreak, MAX_ACCEL_STEPS};
pub use system::RailConfig;
pub use travel::TravelConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Microseconds, Steps};
