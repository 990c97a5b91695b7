//! Line command parsing.

use core::str::FromStr;

use crate::config::units::Steps;
use crate::error::CommandError;

/// One line of the host protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// `MOVE_TO <position>`
    MoveTo(Steps),
    /// `MOVE_LEFT <steps>`
    MoveLeft(u32),
    /// `MOVE_RIGHT <steps>`
    MoveRight(u32),
    /// `HOME_TO_CENTER`
    HomeToCenter,
    /// `SEEK_LEFT_LIMIT`
    SeekLeftLimit,
    /// `SEEK_RIGHT_LIMIT`
    SeekRightLimit,
    /// `MEASURE_RAIL`
    MeasureRail,
    /// `SET_POS <position>`
    SetPosition(Steps),
    /// `GET_POS`
    GetPosition,
    /// `EMERGENCY_STOP`
    EmergencyStop,
}

#[derive(Clone, Copy)]
enum Keyword {
    MoveTo,
    MoveLeft,
    MoveRight,
    HomeToCenter,
    SeekLeftLimit,
    SeekRightLimit,
    MeasureRail,
    SetPosition,
    GetPosition,
    EmergencyStop,
}

const KEYWORDS: [(&str, Keyword); 10] = [
    ("MOVE_TO", Keyword::MoveTo),
    ("MOVE_LEFT", Keyword::MoveLeft),
    ("MOVE_RIGHT", Keyword::MoveRight),
    ("HOME_TO_CENTER", Keyword::HomeToCenter),
    ("SEEK_LEFT_LIMIT", Keyword::SeekLeftLimit),
    ("SEEK_RIGHT_LIMIT", Keyword::SeekRightLimit),
    ("MEASURE_RAIL", Keyword::MeasureRail),
    ("SET_POS", Keyword::SetPosition),
    ("GET_POS", Keyword::GetPosition),
    ("EMERGENCY_STOP", Keyword::EmergencyStop),
];

impl Command {
    /// Check whether the command should bypass the queue.
    ///
    /// A receive handler that sees `EMERGENCY_STOP` raises the abort token
    /// directly so the running move stops at its next step.
    #[inline]
    pub fn is_urgent(&self) -> bool {
        matches!(self, Command::EmergencyStop)
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> core::result::Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let word = tokens.next().ok_or(CommandError::Empty)?;

        let keyword = KEYWORDS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(word))
            .map(|&(_, keyword)| keyword)
            .ok_or_else(|| CommandError::Unknown(clip(word)))?;

        let command = match keyword {
            Keyword::MoveTo => Command::MoveTo(Steps(argument(tokens.next(), "position")?)),
            Keyword::MoveLeft => Command::MoveLeft(argument(tokens.next(), "steps")?),
            Keyword::MoveRight => Command::MoveRight(argument(tokens.next(), "steps")?),
            Keyword::HomeToCenter => Command::HomeToCenter,
            Keyword::SeekLeftLimit => Command::SeekLeftLimit,
            Keyword::SeekRightLimit => Command::SeekRightLimit,
            Keyword::MeasureRail => Command::MeasureRail,
            Keyword::SetPosition => Command::SetPosition(Steps(argument(tokens.next(), "position")?)),
            Keyword::GetPosition => Command::GetPosition,
            Keyword::EmergencyStop => Command::EmergencyStop,
        };

        if tokens.next().is_some() {
            return Err(CommandError::TrailingInput);
        }

        Ok(command)
    }
}

fn argument<T: FromStr>(token: Option<&str>, name: &'static str) -> core::result::Result<T, CommandError> {
    let token = token.ok_or(CommandError::MissingArgument(name))?;
    token
        .parse()
        .map_err(|_| CommandError::InvalidArgument(clip(token)))
}

fn clip<const N: usize>(s: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
