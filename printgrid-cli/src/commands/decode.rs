use crate::{read_text, write_output};
use anyhow::{bail, Context, Result};
use colored::*;
use printgrid_core::{decode_grid, GridError};
use tracing::{info, warn};

pub fn execute(input: &str, output: Option<&str>) -> Result<()> {
    info!("Decoding sheet: {}", input);

    let text = read_text(input)?;

    let data = match decode_grid(&text) {
        Ok(data) => data,
        Err(GridError::ChecksumMismatch(report)) => {
            eprintln!("{} Checksum mismatch", "✗".red());
            for row in &report.failed_rows {
                warn!("Row {} failed its checksum", row);
            }
            for column in &report.failed_columns {
                warn!("Column {} failed its checksum", column);
            }
            for cell in report.candidates() {
                eprintln!("  Error found: {}", cell.to_string().yellow());
            }
            if report.candidates().is_empty() {
                eprintln!(
                    "  {} No single cell can be blamed; re-check the failed rows and columns",
                    "!".yellow()
                );
            }
            bail!("Sheet rejected: {}", report);
        }
        Err(e @ GridError::CombinedChecksumMismatch { .. }) => {
            eprintln!(
                "{} Error found in checksum, double-check the last row and last column",
                "✗".red()
            );
            return Err(e).context("Sheet rejected");
        }
        Err(e) => return Err(e).context("Failed to decode sheet"),
    };

    write_output(output, &data)?;
    info!("Decoded {} bytes", data.len());

    Ok(())
}
