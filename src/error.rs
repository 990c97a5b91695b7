//! Error types for rail-motion.
//!
//! Limit blocks, homing failures and aborts are reported through
//! [`MoveReport`](crate::MoveReport) and [`HomingReport`](crate::HomingReport),
//! not through this type. Errors here are configuration mistakes, pin I/O
//! failures and malformed commands.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all rail-motion operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Pin or sensor I/O error
    Motor(MotorError),
    /// Text command parsing error
    Command(CommandError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Travel length leaves no usable range once both end buffers are removed
    InvalidTravel {
        /// Configured total travel in steps
        total_steps: i64,
        /// Configured end buffer in steps
        end_buffer: i64,
    },
    /// Step delay range is empty or inverted
    InvalidDelayRange {
        /// Minimum (cruise) delay in microseconds
        min_us: u32,
        /// Maximum (start) delay in microseconds
        max_us: u32,
    },
    /// Step pulse width is zero or does not fit in the delay it belongs to
    InvalidPulseWidth {
        /// Pulse width in microseconds
        width_us: u32,
        /// Shortest period the pulse must fit into
        period_us: u32,
    },
    /// Acceleration window is negative or too long
    InvalidAccelSteps(i64),
    /// Homing seek or backoff delay is zero
    InvalidHomingDelay(u32),
    /// Homing seek ceiling is zero
    InvalidSeekCeiling,
    /// Builder is missing a required part
    MissingPart(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Pin and sensor errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorError {
    /// Output pin operation failed
    PinError,
    /// Limit switch could not be read
    SensorError,
}

/// Text command parsing errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Line was empty
    Empty,
    /// Keyword is not a known command
    Unknown(heapless::String<32>),
    /// Command requires an argument that was not given
    MissingArgument(&'static str),
    /// Argument could not be parsed as an integer
    InvalidArgument(heapless::String<32>),
    /// Command was followed by unexpected extra tokens
    TrailingInput,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
            Error::Command(e) => write!(f, "Command error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidTravel {
                total_steps,
                end_buffer,
            } => write!(
                f,
                "Invalid travel: {} total steps leave no usable range with an end buffer of {}",
                total_steps, end_buffer
            ),
            ConfigError::InvalidDelayRange { min_us, max_us } => write!(
                f,
                "Invalid delay range: min ({} us) must be > 0 and <= max ({} us)",
                min_us, max_us
            ),
            ConfigError::InvalidPulseWidth {
                width_us,
                period_us,
            } => write!(
                f,
                "Invalid pulse width: {} us must be > 0 and <= {} us",
                width_us, period_us
            ),
            ConfigError::InvalidAccelSteps(v) => {
                write!(f, "Invalid accel steps: {}. Must be 0..=1048576", v)
            }
            ConfigError::InvalidHomingDelay(v) => {
                write!(f, "Invalid homing delay: {} us. Must be > 0", v)
            }
            ConfigError::InvalidSeekCeiling => write!(f, "Homing seek ceiling must be > 0"),
            ConfigError::MissingPart(part) => write!(f, "{} is required", part),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PinError => write!(f, "GPIO pin operation failed"),
            MotorError::SensorError => write!(f, "Limit switch read failed"),
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "empty command"),
            CommandError::Unknown(word) => write!(f, "unknown command '{}'", word),
            CommandError::MissingArgument(name) => write!(f, "missing argument: {}", name),
            CommandError::InvalidArgument(arg) => write!(f, "invalid argument '{}'", arg),
            CommandError::TrailingInput => write!(f, "unexpected trailing input"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

impl From<CommandError> for Error {
    fn from(e: CommandError) -> Self {
        Error::Command(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}

#[cfg(feature = "std")]
impl std::error::Error for CommandError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_wraps_source() {
        let err: Error = MotorError::SensorError.into();
        assert_eq!(
            format!("{}", err),
            "Motor error: Limit switch read failed"
        );

        let err: Error = ConfigError::InvalidDelayRange {
            min_us: 500,
            max_us: 100,
        }
        .into();
        assert!(format!("{}", err).contains("min (500 us)"));
    }
}
