#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Instruction-driven rover that moves and turns one step at a time.
//!
//! A [`ScriptedRover`] owns its coordinate, its facing and a FIFO queue of
//! pending [`Instruction`]s. Each call to [`Rover::make_move`] consumes the
//! front instruction; the queue only ever shrinks unless a caller assigns a
//! new one. The rover enforces the lower grid bound on its own, while the
//! planet is responsible for the upper bound and for collisions.

use std::collections::VecDeque;

use rover_sim_core::{Coordinate, Direction, Instruction, Rover, SimulationError};
use tracing::trace;

/// Default [`Rover`] implementation backed by a queue of scripted instructions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedRover {
    coordinate: Coordinate,
    direction: Direction,
    instructions: VecDeque<Instruction>,
}

impl ScriptedRover {
    /// Creates a rover that will execute the provided instructions in order.
    #[must_use]
    pub fn new<I>(coordinate: Coordinate, direction: Direction, instructions: I) -> Self
    where
        I: IntoIterator<Item = Instruction>,
    {
        Self {
            coordinate,
            direction,
            instructions: instructions.into_iter().collect(),
        }
    }

    /// Creates a rover with no pending instructions.
    #[must_use]
    pub fn idle(coordinate: Coordinate, direction: Direction) -> Self {
        Self::new(coordinate, direction, Vec::new())
    }

    /// Instructions that have not been executed yet, front first.
    #[must_use]
    pub fn instructions(&self) -> &VecDeque<Instruction> {
        &self.instructions
    }

    /// Replaces the pending queue, discarding anything not yet executed.
    pub fn assign_instructions<I>(&mut self, instructions: I)
    where
        I: IntoIterator<Item = Instruction>,
    {
        self.instructions = instructions.into_iter().collect();
    }

    /// Advances one cell in the facing direction.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::BoundaryViolation`] when moving south at
    /// `y == 0` or west at `x == 0`; the coordinate is left untouched.
    pub fn move_forward(&mut self) -> Result<(), SimulationError> {
        let current = self.coordinate;
        let next = match self.direction {
            Direction::North => current.offset(0, 1),
            Direction::East => current.offset(1, 0),
            Direction::South => {
                if current.y() == 0 {
                    return Err(self.boundary_violation());
                }
                current.offset(0, -1)
            }
            Direction::West => {
                if current.x() == 0 {
                    return Err(self.boundary_violation());
                }
                current.offset(-1, 0)
            }
        };

        self.coordinate = next;
        Ok(())
    }

    /// Turns a quarter in place according to the instruction.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidArgument`] for anything other than
    /// [`Instruction::RotateLeft`] or [`Instruction::RotateRight`].
    pub fn rotate(&mut self, instruction: Instruction) -> Result<(), SimulationError> {
        if !instruction.is_rotation() {
            return Err(SimulationError::InvalidArgument {
                argument: "instruction",
                reason: format!("{instruction:?} is not a rotation"),
            });
        }

        self.direction = if instruction == Instruction::RotateLeft {
            self.direction.left()
        } else {
            self.direction.right()
        };
        Ok(())
    }

    fn boundary_violation(&self) -> SimulationError {
        SimulationError::BoundaryViolation {
            coordinate: self.coordinate,
            direction: self.direction,
        }
    }
}

impl Rover for ScriptedRover {
    fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn next_move(&self) -> Instruction {
        self.instructions
            .front()
            .copied()
            .unwrap_or(Instruction::Nothing)
    }

    fn make_move(&mut self) -> Result<(), SimulationError> {
        let instruction = self
            .instructions
            .pop_front()
            .ok_or(SimulationError::NoMoreInstructions)?;
        trace!(?instruction, coordinate = %self.coordinate, direction = %self.direction, "executing");

        match instruction {
            Instruction::MoveForward => self.move_forward(),
            turn if turn.is_rotation() => self.rotate(turn),
            _ => Err(SimulationError::InvalidState { instruction }),
        }
    }
}
