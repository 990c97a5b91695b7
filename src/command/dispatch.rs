//! Running parsed commands against a rail.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::error::Result;
use crate::motion::Direction;
use crate::motor::{HomingHalt, LinearRail, MoveOutcome, MoveReport};

use super::parser::Command;
use super::response::Response;

impl<'a, STEP, DIR, LEFT, RIGHT, FAULT, DELAY> LinearRail<'a, STEP, DIR, LEFT, RIGHT, FAULT, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    LEFT: InputPin,
    RIGHT: InputPin,
    FAULT: OutputPin,
    DELAY: DelayNs,
{
    /// Run one protocol command to completion and build its reply.
    ///
    /// Pin failures are returned as errors; limit blocks, aborts and failed
    /// homing are ordinary replies.
    pub fn execute(&mut self, command: Command) -> Result<Response> {
        debug!("execute {}", command);

        let response = match command {
            Command::MoveTo(target) => movement(self.move_to(target)?),
            Command::MoveLeft(steps) => movement(self.move_by(steps, Direction::Left)?),
            Command::MoveRight(steps) => movement(self.move_by(steps, Direction::Right)?),
            Command::HomeToCenter => {
                let report = self.home_to_center()?;
                match report.travel {
                    Some(travel) => movement(travel),
                    None => homing_failed(report.homing.halt),
                }
            }
            Command::SeekLeftLimit => {
                let report = self.seek_left()?;
                if report.is_complete() {
                    Response::MovementComplete
                } else {
                    homing_failed(report.halt)
                }
            }
            Command::SeekRightLimit => {
                let report = self.seek_right()?;
                if report.is_complete() {
                    Response::MovementComplete
                } else {
                    homing_failed(report.halt)
                }
            }
            Command::MeasureRail => {
                let measurement = self.measure_rail()?;
                match measurement.total_steps {
                    Some(total) => Response::Rail(total),
                    None => {
                        let halt = measurement.right.unwrap_or(measurement.left).halt;
                        homing_failed(halt)
                    }
                }
            }
            Command::SetPosition(position) => Response::Position(self.set_position(position)),
            Command::GetPosition => Response::Position(self.position()),
            Command::EmergencyStop => {
                self.stop()?;
                Response::MovementStopped
            }
        };

        Ok(response)
    }
}

fn movement(report: MoveReport) -> Response {
    match report.outcome {
        MoveOutcome::Completed | MoveOutcome::Blocked => Response::MovementComplete,
        MoveOutcome::Aborted => Response::MovementStopped,
    }
}

fn homing_failed(halt: Option<HomingHalt>) -> Response {
    match halt {
        Some(HomingHalt::Aborted) => Response::MovementStopped,
        _ => Response::Failed("homing failed"),
    }
}
