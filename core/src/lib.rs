#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the rover simulation.
//!
//! This crate defines the value types and the two capability sets that the
//! rest of the workspace is built on. The planet crate provides the
//! authoritative occupancy grid behind the [`Planet`] contract, the rover
//! crate provides the instruction-driven agent behind the [`Rover`]
//! contract, and the simulation system drives both while enforcing the
//! spatial invariants. Every failure is reported through
//! [`SimulationError`] and propagated unchanged to the caller.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Location of a single grid cell expressed as x and y coordinates.
///
/// Coordinates are plain values: a rover's position is replaced wholesale on
/// every move instead of being adjusted in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    x: i32,
    y: i32,
}

impl Coordinate {
    /// Creates a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal component of the coordinate.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical component of the coordinate.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Returns a new coordinate translated by the provided deltas.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cardinal directions a rover may face.
///
/// Serialized as the single letter used in reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Facing toward increasing y.
    #[serde(rename = "N")]
    North,
    /// Facing toward increasing x.
    #[serde(rename = "E")]
    East,
    /// Facing toward decreasing y.
    #[serde(rename = "S")]
    South,
    /// Facing toward decreasing x.
    #[serde(rename = "W")]
    West,
}

impl Direction {
    /// Direction reached by a quarter turn counter-clockwise.
    #[must_use]
    pub const fn left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::East => Self::North,
            Self::South => Self::East,
            Self::West => Self::South,
        }
    }

    /// Direction reached by a quarter turn clockwise.
    #[must_use]
    pub const fn right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// First letter of the direction name, used when reporting positions.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "North",
            Self::East => "East",
            Self::South => "South",
            Self::West => "West",
        };
        f.write_str(name)
    }
}

/// Atomic actions a rover can be scripted to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    /// Advance one cell in the facing direction.
    MoveForward,
    /// Turn a quarter counter-clockwise without moving.
    RotateLeft,
    /// Turn a quarter clockwise without moving.
    RotateRight,
    /// Sentinel reported when no instruction is pending. Never queued.
    Nothing,
}

impl Instruction {
    /// Reports whether the instruction only reorients the rover.
    #[must_use]
    pub const fn is_rotation(self) -> bool {
        matches!(self, Self::RotateLeft | Self::RotateRight)
    }
}

/// Final coordinate and facing of a rover once its queue has drained.
///
/// This is also the machine-readable report shape: serde renders it as
/// `{"coordinate": {"x": .., "y": ..}, "direction": "N"}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishingPosition {
    /// Cell the rover occupies.
    pub coordinate: Coordinate,
    /// Direction the rover faces.
    pub direction: Direction,
}

impl FinishingPosition {
    /// Captures the current state of the provided rover.
    #[must_use]
    pub fn of<R>(rover: &R) -> Self
    where
        R: Rover + ?Sized,
    {
        Self {
            coordinate: rover.coordinate(),
            direction: rover.direction(),
        }
    }
}

impl fmt::Display for FinishingPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.coordinate.x(),
            self.coordinate.y(),
            self.direction.letter()
        )
    }
}

/// Failures raised by planets, rovers and the simulation driver.
///
/// Nothing is retried or recovered internally; each variant aborts the
/// current operation and travels unchanged to the caller.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    /// A required argument was missing or unusable.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        argument: &'static str,
        /// Explanation of why the argument was rejected.
        reason: String,
    },
    /// A coordinate lies outside the planet's extent.
    #[error("rover at {coordinate} is outside the {width}x{height} planet")]
    OutOfBounds {
        /// Coordinate that fell outside the grid.
        coordinate: Coordinate,
        /// Exclusive width of the planet.
        width: u32,
        /// Exclusive height of the planet.
        height: u32,
    },
    /// The destination cell is already occupied by another rover.
    #[error("a rover already exists at {coordinate}")]
    PositionConflict {
        /// Cell that was already taken.
        coordinate: Coordinate,
    },
    /// The grid does not track the requested coordinate.
    #[error("no grid cell is tracked at {coordinate}")]
    KeyNotFound {
        /// Coordinate that was looked up.
        coordinate: Coordinate,
    },
    /// A move was requested while the instruction queue was empty.
    #[error("rover has no more movements to make")]
    NoMoreInstructions,
    /// A forward move would take the rover below zero on its axis.
    #[error("rover at {coordinate} was instructed to go {direction} off the grid")]
    BoundaryViolation {
        /// Coordinate the rover occupied when the move was refused.
        coordinate: Coordinate,
        /// Direction the rover was facing.
        direction: Direction,
    },
    /// An instruction that cannot be dispatched reached the rover.
    #[error("rover has invalid movement {instruction:?}")]
    InvalidState {
        /// Instruction that could not be executed.
        instruction: Instruction,
    },
}

/// Agent contract: a positioned, oriented unit draining an instruction queue.
pub trait Rover {
    /// Cell the rover currently occupies.
    fn coordinate(&self) -> Coordinate;

    /// Direction the rover currently faces.
    fn direction(&self) -> Direction;

    /// Front of the instruction queue without consuming it.
    ///
    /// Returns [`Instruction::Nothing`] when no instruction is pending.
    fn next_move(&self) -> Instruction;

    /// Consumes and executes the front instruction.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::NoMoreInstructions`] when the queue is
    /// empty, or the failure raised by the dispatched action.
    fn make_move(&mut self) -> Result<(), SimulationError>;
}

/// Occupancy contract: the bounded grid rovers are placed on and move across.
pub trait Planet {
    /// Grid type exposed for inspection.
    type Grid;

    /// Exclusive width of the planet.
    fn width(&self) -> u32;

    /// Exclusive height of the planet.
    fn height(&self) -> u32;

    /// Occupancy grid, absent when either dimension is zero.
    fn grid(&self) -> Option<&Self::Grid>;

    /// Stamps the initial position of every rover onto the grid, in order.
    ///
    /// Placements made before a failure remain applied.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::OutOfBounds`] for a rover outside the
    /// planet and [`SimulationError::PositionConflict`] for a rover placed
    /// on an occupied cell.
    fn build_planet<R: Rover>(&mut self, rovers: &[R]) -> Result<(), SimulationError>;

    /// Reports whether a rover occupies the provided cell.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::KeyNotFound`] when the grid does not track
    /// the coordinate.
    fn is_area_occupied(&self, point: Coordinate) -> Result<bool, SimulationError>;

    /// Moves a rover's occupancy from `previous` to its current coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::OutOfBounds`] when the rover left the grid
    /// and [`SimulationError::PositionConflict`] when its destination is taken.
    fn update_grid_position<R: Rover + ?Sized>(
        &mut self,
        rover: &R,
        previous: Coordinate,
    ) -> Result<(), SimulationError>;
}
