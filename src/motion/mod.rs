//! Motion module for rail-motion.
//!
//! Provides eased profile calculation, step-by-step execution state, and the
//! abort flag polled while a move runs.

mod abort;
mod executor;
mod profile;

pub use abort::AbortToken;
pub use executor::MotionExecutor;
pub use profile::{Direction, EasedProfile, MotionPhase};
