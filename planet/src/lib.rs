#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative occupancy state for the rover simulation.

use rover_sim_core::{Coordinate, Planet, Rover, SimulationError};
use tracing::debug;

/// Bounded planet surface backed by a dense occupancy grid.
#[derive(Clone, Debug)]
pub struct GridPlanet {
    width: u32,
    height: u32,
    grid: Option<OccupancyGrid>,
}

impl GridPlanet {
    /// Creates a planet with the provided exclusive width and height.
    ///
    /// The grid is materialized immediately. A zero width or height yields a
    /// planet without a grid, on which every cell lookup fails.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidArgument`] when a grid of
    /// `width * height` cells cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self, SimulationError> {
        let grid = if width > 0 && height > 0 {
            Some(OccupancyGrid::new(width, height)?)
        } else {
            None
        };
        Ok(Self {
            width,
            height,
            grid,
        })
    }

    /// Coordinates currently marked as occupied, in row-major order.
    #[must_use]
    pub fn occupied_cells(&self) -> Vec<Coordinate> {
        self.grid
            .iter()
            .flat_map(|grid| grid.iter())
            .filter_map(|(coordinate, occupied)| occupied.then_some(coordinate))
            .collect()
    }

    fn contains(&self, coordinate: Coordinate) -> bool {
        is_within(coordinate, self.width, self.height)
    }

    fn out_of_bounds(&self, coordinate: Coordinate) -> SimulationError {
        SimulationError::OutOfBounds {
            coordinate,
            width: self.width,
            height: self.height,
        }
    }

    fn grid_mut(&mut self, coordinate: Coordinate) -> Result<&mut OccupancyGrid, SimulationError> {
        self.grid
            .as_mut()
            .ok_or(SimulationError::KeyNotFound { coordinate })
    }
}

impl Planet for GridPlanet {
    type Grid = OccupancyGrid;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn grid(&self) -> Option<&OccupancyGrid> {
        self.grid.as_ref()
    }

    fn build_planet<R: Rover>(&mut self, rovers: &[R]) -> Result<(), SimulationError> {
        for rover in rovers {
            let coordinate = rover.coordinate();
            if !self.contains(coordinate) {
                return Err(self.out_of_bounds(coordinate));
            }

            let grid = self.grid_mut(coordinate)?;
            if grid.is_occupied(coordinate)? {
                return Err(SimulationError::PositionConflict { coordinate });
            }

            grid.occupy(coordinate)?;
            debug!(%coordinate, "rover placed on planet");
        }

        Ok(())
    }

    fn is_area_occupied(&self, point: Coordinate) -> Result<bool, SimulationError> {
        self.grid
            .as_ref()
            .ok_or(SimulationError::KeyNotFound { coordinate: point })?
            .is_occupied(point)
    }

    fn update_grid_position<R: Rover + ?Sized>(
        &mut self,
        rover: &R,
        previous: Coordinate,
    ) -> Result<(), SimulationError> {
        let destination = rover.coordinate();
        if destination == previous {
            return Ok(());
        }

        if !self.contains(destination) {
            return Err(self.out_of_bounds(destination));
        }

        let grid = self.grid_mut(destination)?;
        if grid.is_occupied(destination)? {
            return Err(SimulationError::PositionConflict {
                coordinate: destination,
            });
        }

        grid.vacate(previous)?;
        grid.occupy(destination)?;
        debug!(from = %previous, to = %destination, "grid position updated");
        Ok(())
    }
}

/// Dense row-major occupancy flags covering `[0, width) x [0, height)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    fn new(width: u32, height: u32) -> Result<Self, SimulationError> {
        let too_large = |reason: String| SimulationError::InvalidArgument {
            argument: "width",
            reason: format!("a {width}x{height} grid cannot be allocated: {reason}"),
        };

        let capacity = usize::try_from(u64::from(width) * u64::from(height))
            .map_err(|error| too_large(error.to_string()))?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(capacity)
            .map_err(|error| too_large(error.to_string()))?;
        cells.resize(capacity, false);

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Number of cells tracked by the grid.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Reports whether the grid tracks no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Provides the dimensions of the grid.
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Reads the occupancy flag of a tracked cell.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::KeyNotFound`] for a coordinate outside the grid.
    pub fn is_occupied(&self, coordinate: Coordinate) -> Result<bool, SimulationError> {
        let index = self.index(coordinate)?;
        self.cells
            .get(index)
            .copied()
            .ok_or(SimulationError::KeyNotFound { coordinate })
    }

    /// Iterates over every tracked cell with its occupancy flag.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, bool)> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().map(move |(index, occupied)| {
            let x = (index % width) as i32;
            let y = (index / width) as i32;
            (Coordinate::new(x, y), *occupied)
        })
    }

    fn occupy(&mut self, coordinate: Coordinate) -> Result<(), SimulationError> {
        self.set(coordinate, true)
    }

    fn vacate(&mut self, coordinate: Coordinate) -> Result<(), SimulationError> {
        self.set(coordinate, false)
    }

    fn set(&mut self, coordinate: Coordinate, occupied: bool) -> Result<(), SimulationError> {
        let index = self.index(coordinate)?;
        let slot = self
            .cells
            .get_mut(index)
            .ok_or(SimulationError::KeyNotFound { coordinate })?;
        *slot = occupied;
        Ok(())
    }

    fn index(&self, coordinate: Coordinate) -> Result<usize, SimulationError> {
        if !is_within(coordinate, self.width, self.height) {
            return Err(SimulationError::KeyNotFound { coordinate });
        }

        let lookup = || -> Option<usize> {
            let row = usize::try_from(coordinate.y()).ok()?;
            let column = usize::try_from(coordinate.x()).ok()?;
            let width = usize::try_from(self.width).ok()?;
            Some(row * width + column)
        };
        lookup().ok_or(SimulationError::KeyNotFound { coordinate })
    }
}

fn is_within(coordinate: Coordinate, width: u32, height: u32) -> bool {
    coordinate.x() >= 0
        && coordinate.y() >= 0
        && i64::from(coordinate.x()) < i64::from(width)
        && i64::from(coordinate.y()) < i64::from(height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_row_major() {
        let grid = OccupancyGrid::new(3, 2).expect("grid");
        assert_eq!(grid.index(Coordinate::new(0, 0)), Ok(0));
        assert_eq!(grid.index(Coordinate::new(2, 0)), Ok(2));
        assert_eq!(grid.index(Coordinate::new(0, 1)), Ok(3));
        assert_eq!(grid.index(Coordinate::new(2, 1)), Ok(5));
    }

    #[test]
    fn index_rejects_negative_and_overflowing_coordinates() {
        let grid = OccupancyGrid::new(3, 2).expect("grid");
        for coordinate in [
            Coordinate::new(-1, 0),
            Coordinate::new(0, -1),
            Coordinate::new(3, 0),
            Coordinate::new(0, 2),
        ] {
            assert_eq!(
                grid.index(coordinate),
                Err(SimulationError::KeyNotFound { coordinate })
            );
        }
    }

    #[test]
    fn iteration_yields_every_cell_once() {
        let grid = OccupancyGrid::new(3, 2).expect("grid");
        let mut coordinates: Vec<_> = grid.iter().map(|(coordinate, _)| coordinate).collect();
        coordinates.sort();
        coordinates.dedup();
        assert_eq!(coordinates.len(), 6);
        assert!(grid.iter().all(|(_, occupied)| !occupied));
    }

    #[test]
    fn occupy_then_vacate_restores_free_cell() {
        let mut grid = OccupancyGrid::new(2, 2).expect("grid");
        let cell = Coordinate::new(1, 1);
        grid.occupy(cell).expect("occupy");
        assert_eq!(grid.is_occupied(cell), Ok(true));
        grid.vacate(cell).expect("vacate");
        assert_eq!(grid.is_occupied(cell), Ok(false));
    }

    #[test]
    fn zero_dimension_planet_has_no_grid() {
        let planet = GridPlanet::new(0, 4).expect("planet");
        assert!(planet.grid().is_none());
        assert!(planet.occupied_cells().is_empty());
        assert_eq!(
            planet.is_area_occupied(Coordinate::new(0, 0)),
            Err(SimulationError::KeyNotFound {
                coordinate: Coordinate::new(0, 0)
            })
        );
    }
}
