#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Sequential simulation driver that runs every rover against a shared planet.
//!
//! Rovers are drained strictly in input order: the full instruction queue of
//! one rover is executed before the next rover starts. The planet's grid is
//! the only shared state and is touched exclusively from the driver, so no
//! synchronization is involved. Failures are never caught or translated; the
//! first one aborts the run and leaves the planet and the rovers exactly as
//! the last successful step left them.

use rover_sim_core::{FinishingPosition, Instruction, Planet, Rover, SimulationError};
use tracing::{debug, info};

/// Drives an ordered fleet of rovers across a planet.
#[derive(Debug)]
pub struct Simulation<P, R> {
    planet: P,
    rovers: Vec<R>,
}

impl<P, R> Simulation<P, R>
where
    P: Planet,
    R: Rover,
{
    /// Stamps the initial rover positions onto the planet.
    ///
    /// # Errors
    ///
    /// Propagates any failure raised while building the planet; the
    /// simulation is not constructed in that case.
    pub fn new(mut planet: P, rovers: Vec<R>) -> Result<Self, SimulationError> {
        planet.build_planet(&rovers)?;
        debug!(
            rovers = rovers.len(),
            width = planet.width(),
            height = planet.height(),
            "simulation prepared"
        );
        Ok(Self { planet, rovers })
    }

    /// Drains every rover in input order and reports where each one finished.
    ///
    /// # Errors
    ///
    /// Returns the first failure raised by any rover; later rovers are not run.
    pub fn run(
        &mut self,
    ) -> Result<impl Iterator<Item = FinishingPosition> + '_, SimulationError> {
        info!(rovers = self.rovers.len(), "simulation started");
        for rover in &mut self.rovers {
            drain_rover(&mut self.planet, rover)?;
        }
        info!("simulation finished");

        Ok(self.finishing_positions())
    }

    /// Drains the queue of the rover at `index` in the input order.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidArgument`] when no rover exists at
    /// `index`, or the first failure raised while moving it.
    pub fn run_rover(&mut self, index: usize) -> Result<(), SimulationError> {
        let fleet_size = self.rovers.len();
        let rover = self
            .rovers
            .get_mut(index)
            .ok_or_else(|| SimulationError::InvalidArgument {
                argument: "index",
                reason: format!("no rover at index {index} in a fleet of {fleet_size}"),
            })?;
        drain_rover(&mut self.planet, rover)
    }

    /// Current position of every rover in input order.
    ///
    /// The sequence is computed lazily from the current state and can be
    /// requested any number of times.
    pub fn finishing_positions(&self) -> impl Iterator<Item = FinishingPosition> + '_ {
        self.rovers.iter().map(FinishingPosition::of)
    }

    /// Planet the rovers are moving on.
    #[must_use]
    pub fn planet(&self) -> &P {
        &self.planet
    }

    /// Rovers in input order.
    #[must_use]
    pub fn rovers(&self) -> &[R] {
        &self.rovers
    }
}

fn drain_rover<P, R>(planet: &mut P, rover: &mut R) -> Result<(), SimulationError>
where
    P: Planet,
    R: Rover,
{
    while rover.next_move() != Instruction::Nothing {
        let previous = rover.coordinate();
        rover.make_move()?;

        let current = rover.coordinate();
        if current == previous {
            continue;
        }

        // Checked here and again inside the planet's update.
        if planet.is_area_occupied(current)? {
            return Err(SimulationError::PositionConflict {
                coordinate: current,
            });
        }

        planet.update_grid_position(&*rover, previous)?;
    }

    Ok(())
}
