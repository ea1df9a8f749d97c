//! Rendering of finishing positions.

use std::io::Write;

use anyhow::{Context, Result};
use rover_sim_core::FinishingPosition;

use crate::config::OutputFormat;

/// Writes one entry per rover in input order.
pub(crate) fn write_positions<W: Write>(
    out: &mut W,
    positions: &[FinishingPosition],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for position in positions {
                writeln!(out, "{position}").context("failed to write position")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, positions)
                .context("failed to encode positions")?;
            writeln!(out).context("failed to write position")?;
        }
    }
    Ok(())
}

/// Writes the message shown when the simulation itself fails.
pub(crate) fn write_failure<W: Write>(out: &mut W, error: &dyn std::error::Error) -> Result<()> {
    writeln!(out, "There was an error with the simulation: {error}")
        .and_then(|()| writeln!(out, "Please update the file and try again."))
        .context("failed to write failure message")
}
