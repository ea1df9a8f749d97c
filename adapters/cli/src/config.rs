//! Command-line configuration for the rover simulator.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Default tracing filter used when `RUST_LOG` is not set.
pub(crate) const DEFAULT_LOG_FILTER: &str = "warn";

/// Rover simulator command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "rover-sim",
    about = "Runs scripted rovers across a bounded planet grid"
)]
pub(crate) struct CliArgs {
    /// Scenario file to simulate. Prompted for on stdin when omitted.
    pub(crate) input: Option<PathBuf>,

    /// How finishing positions are printed.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,

    /// Log filter (error, warn, info, debug, trace). `RUST_LOG` takes precedence.
    #[arg(long, default_value = DEFAULT_LOG_FILTER)]
    pub(crate) log_level: String,
}

/// Output encodings supported for finishing positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// One `x y D` line per rover.
    Text,
    /// A JSON array with one object per rover.
    Json,
}
