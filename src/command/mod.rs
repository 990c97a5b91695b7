//! Text command protocol.
//!
//! One command per line, keyword first, case-insensitive:
//!
//! ```text
//! MOVE_TO 150000      -> MOVEMENT_COMPLETE | MOVEMENT_STOPPED
//! MOVE_LEFT 300       -> MOVEMENT_COMPLETE | MOVEMENT_STOPPED
//! HOME_TO_CENTER      -> MOVEMENT_COMPLETE | ERROR homing failed
//! MEASURE_RAIL        -> RAIL 184245
//! SET_POS 92122       -> POS 92122
//! GET_POS             -> POS 92122
//! ```
//!
//! `MOVE_LEFT` and `MOVE_RIGHT` take an unsigned count; `MOVE_LEFT -5` is
//! rejected with `ERROR invalid argument '-5'` rather than run as an empty move.

mod dispatch;
mod parser;
mod response;

pub use parser::Command;
pub use response::Response;
