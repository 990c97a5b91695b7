//! # rail-motion
//!
//! Single-axis linear rail stepper control with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Eased motion profiles**: smoothstep acceleration and deceleration between
//!   a slow start delay and a fast cruise delay
//! - **Limit interlocks**: every step is gated by the end-of-travel switch in the
//!   direction of travel
//! - **Homing**: seek a physical limit, back off a safety buffer, and re-establish
//!   the absolute position reference
//! - **Cooperative abort**: an [`AbortToken`] that an interrupt handler or serial
//!   command can raise while a move is running
//! - **Text command protocol**: `MOVE_TO`, `HOME_TO_CENTER`, `GET_POS`, ...
//! - **no_std compatible**: core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rail_motion::{AbortToken, LinearRail, RailConfig, Steps};
//!
//! static ABORT: AbortToken = AbortToken::new();
//!
//! let mut rail = LinearRail::builder()
//!     .config(RailConfig::default())
//!     .step_pin(step_pin)
//!     .dir_pin(dir_pin)
//!     .fault_pin(led_pin)
//!     .left_switch(left_pin)
//!     .right_switch(right_pin)
//!     .delay(delay)
//!     .abort(&ABORT)
//!     .build()?;
//!
//! rail.home_to_center()?;
//! let report = rail.move_to(Steps(150_000))?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod fmt;

// Core modules
pub mod command;
pub mod config;
pub mod error;
pub mod motion;
pub mod motor;

// Re-exports for ergonomic API
pub use command::{Command, Response};
pub use config::{validate_config, HomingConfig, MotionTiming, RailConfig, TravelConfig, TravelLimits};
pub use error::{Error, Result};
pub use motion::{AbortToken, Direction, EasedProfile, MotionPhase};
pub use motor::{
    CenteringReport, HomingHalt, HomingPhase, HomingReport, LimitSwitch, LinearRail,
    LinearRailBuilder, MoveOutcome, MoveReport, RailMeasurement,
};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Microseconds, Steps};
