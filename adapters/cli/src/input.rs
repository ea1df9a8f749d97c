//! Parser for the plain-text scenario format.
//!
//! ```text
//! 5 5        <- largest x and y coordinate on the planet
//! 1 2 N      <- rover start: x, y and facing
//! LMLMLMLMM  <- rover instructions
//! 3 3 E
//! MMRMMRMRRM
//! ```

use std::num::ParseIntError;

use rover_sim_core::{Coordinate, Direction, Instruction};
use rover_sim_rover::ScriptedRover;

/// Planet dimensions and rover scripts decoded from a scenario file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Scenario {
    /// Exclusive width of the planet.
    pub(crate) width: u32,
    /// Exclusive height of the planet.
    pub(crate) height: u32,
    /// Rovers in file order.
    pub(crate) rovers: Vec<RoverSpec>,
}

/// Starting state and script of a single rover.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RoverSpec {
    /// Cell the rover starts on.
    pub(crate) coordinate: Coordinate,
    /// Facing the rover starts with.
    pub(crate) direction: Direction,
    /// Instructions executed in order.
    pub(crate) instructions: Vec<Instruction>,
}

impl RoverSpec {
    /// Builds the rover this entry describes.
    pub(crate) fn into_rover(self) -> ScriptedRover {
        ScriptedRover::new(self.coordinate, self.direction, self.instructions)
    }
}

/// Errors that can occur while decoding a scenario file.
#[derive(Debug, thiserror::Error)]
pub(crate) enum InputError {
    /// The file contained no planet dimensions.
    #[error("scenario is empty")]
    Empty,
    /// A line ended before all expected fields were read.
    #[error("line {line}: missing {field}")]
    MissingField {
        /// One-based line number.
        line: usize,
        /// Name of the absent field.
        field: &'static str,
    },
    /// A field that should be an integer could not be parsed.
    #[error("line {line}: could not parse {field} '{value}'")]
    InvalidNumber {
        /// One-based line number.
        line: usize,
        /// Name of the offending field.
        field: &'static str,
        /// Raw text of the field.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },
    /// The largest coordinate is too large to derive a planet size from.
    #[error("line {line}: {field} {value} is too large")]
    DimensionOverflow {
        /// One-based line number.
        line: usize,
        /// Name of the offending field.
        field: &'static str,
        /// Parsed value.
        value: u32,
    },
    /// The starting direction was not one of `N`, `E`, `S` or `W`.
    #[error("line {line}: initial direction '{value}' is incorrect")]
    InvalidDirection {
        /// One-based line number.
        line: usize,
        /// Raw text of the field.
        value: String,
    },
    /// The instruction line contained something other than `M`, `L` or `R`.
    #[error("line {line}: invalid action '{character}'")]
    InvalidInstruction {
        /// One-based line number.
        line: usize,
        /// Offending character.
        character: char,
    },
}

/// Decodes a complete scenario.
///
/// The first line carries the largest valid coordinate on each axis, so one
/// is added to obtain the exclusive planet size. Every rover then takes two
/// lines; a missing final instruction line means the rover has no script.
pub(crate) fn parse_scenario(text: &str) -> Result<Scenario, InputError> {
    let lines: Vec<&str> = text.trim_end().lines().collect();
    let (header, body) = lines.split_first().ok_or(InputError::Empty)?;
    if header.trim().is_empty() {
        return Err(InputError::Empty);
    }

    let mut fields = header.split_whitespace();
    let width = planet_extent(fields.next(), 1, "width")?;
    let height = planet_extent(fields.next(), 1, "height")?;

    let mut rovers = Vec::with_capacity(body.len().div_ceil(2));
    for (pair_index, pair) in body.chunks(2).enumerate() {
        let position_line = pair_index * 2 + 2;
        let (coordinate, direction) = parse_position(pair[0], position_line)?;
        let instructions = match pair.get(1) {
            Some(line) => parse_instructions(line, position_line + 1)?,
            None => Vec::new(),
        };
        rovers.push(RoverSpec {
            coordinate,
            direction,
            instructions,
        });
    }

    Ok(Scenario {
        width,
        height,
        rovers,
    })
}

fn planet_extent(field: Option<&str>, line: usize, name: &'static str) -> Result<u32, InputError> {
    let largest: u32 = parse_field(field, line, name)?;
    largest
        .checked_add(1)
        .ok_or(InputError::DimensionOverflow {
            line,
            field: name,
            value: largest,
        })
}

fn parse_position(text: &str, line: usize) -> Result<(Coordinate, Direction), InputError> {
    let mut fields = text.split_whitespace();
    let x: i32 = parse_field(fields.next(), line, "x")?;
    let y: i32 = parse_field(fields.next(), line, "y")?;
    let letter = fields.next().ok_or(InputError::MissingField {
        line,
        field: "direction",
    })?;
    let direction = match letter {
        "N" => Direction::North,
        "E" => Direction::East,
        "S" => Direction::South,
        "W" => Direction::West,
        other => {
            return Err(InputError::InvalidDirection {
                line,
                value: other.to_owned(),
            })
        }
    };

    Ok((Coordinate::new(x, y), direction))
}

fn parse_instructions(text: &str, line: usize) -> Result<Vec<Instruction>, InputError> {
    text.trim()
        .chars()
        .map(|character| match character.to_ascii_uppercase() {
            'M' => Ok(Instruction::MoveForward),
            'L' => Ok(Instruction::RotateLeft),
            'R' => Ok(Instruction::RotateRight),
            _ => Err(InputError::InvalidInstruction { line, character }),
        })
        .collect()
}

fn parse_field<T>(field: Option<&str>, line: usize, name: &'static str) -> Result<T, InputError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    let value = field.ok_or(InputError::MissingField { line, field: name })?;
    value.parse().map_err(|source| InputError::InvalidNumber {
        line,
        field: name,
        value: value.to_owned(),
        source,
    })
}
