#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that loads a scenario file and runs the rover simulation.

mod config;
mod input;
mod logging;
mod report;

use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use rover_sim_core::{FinishingPosition, SimulationError};
use rover_sim_planet::GridPlanet;
use rover_sim_system_simulation::Simulation;
use tracing::{info, warn};

use crate::{
    config::CliArgs,
    input::{RoverSpec, Scenario},
};

/// Entry point for the rover simulator command-line interface.
fn main() -> Result<()> {
    let args = CliArgs::parse();
    logging::init_logging(&args.log_level);

    let path = match args.input {
        Some(path) => path,
        None => prompt_for_path()?,
    };
    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read scenario file {}", path.display()))?;
    let scenario = input::parse_scenario(&text)
        .with_context(|| format!("failed to parse scenario file {}", path.display()))?;
    info!(
        path = %path.display(),
        width = scenario.width,
        height = scenario.height,
        rovers = scenario.rovers.len(),
        "scenario loaded"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match simulate(scenario) {
        Ok(positions) => report::write_positions(&mut out, &positions, args.format)?,
        Err(error) => {
            warn!(%error, "simulation aborted");
            report::write_failure(&mut out, &error)?;
        }
    }
    out.flush().context("failed to flush output")
}

fn simulate(scenario: Scenario) -> Result<Vec<FinishingPosition>, SimulationError> {
    let planet = GridPlanet::new(scenario.width, scenario.height)?;
    let rovers = scenario
        .rovers
        .into_iter()
        .map(RoverSpec::into_rover)
        .collect();

    let mut simulation = Simulation::new(planet, rovers)?;
    let positions = simulation.run()?.collect();
    Ok(positions)
}

fn prompt_for_path() -> Result<PathBuf> {
    let mut stdout = io::stdout();
    writeln!(
        stdout,
        "Please enter the file path of the text file that contains the simulation:"
    )
    .and_then(|()| stdout.flush())
    .context("failed to write prompt")?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read scenario path")?;
    let trimmed = line.trim();
    if read == 0 || trimmed.is_empty() {
        anyhow::bail!("no scenario path was provided");
    }
    Ok(PathBuf::from(trimmed))
}
