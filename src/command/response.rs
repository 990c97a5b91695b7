//! Protocol replies.

use core::fmt;

use crate::config::units::Steps;
use crate::error::CommandError;

/// Reply line for one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// A move, seek or centering ran to its end (or to a limit).
    MovementComplete,
    /// A move was cut short by the abort token.
    MovementStopped,
    /// Current position.
    Position(Steps),
    /// Measured switch-to-switch travel.
    Rail(Steps),
    /// Command ran but failed.
    Failed(&'static str),
    /// Line could not be parsed.
    Rejected(CommandError),
}

impl Response {
    /// Check whether the reply starts with `ERROR`.
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Response::Failed(_) | Response::Rejected(_))
    }
}

impl From<CommandError> for Response {
    fn from(e: CommandError) -> Self {
        Response::Rejected(e)
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::MovementComplete => write!(f, "MOVEMENT_COMPLETE"),
            Response::MovementStopped => write!(f, "MOVEMENT_STOPPED"),
            Response::Position(pos) => write!(f, "POS {}", pos.0),
            Response::Rail(total) => write!(f, "RAIL {}", total.0),
            Response::Failed(reason) => write!(f, "ERROR {}", reason),
            Response::Rejected(e) => write!(f, "ERROR {}", e),
        }
    }
}
