use crate::read_text;
use anyhow::{Context, Result};
use colored::*;
use printgrid_core::{parse_grid, CellRef, GridDimensions, ValidationReport};
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
struct VerifyOutput<'a> {
    dimensions: GridDimensions,
    valid: bool,
    report: &'a ValidationReport,
    candidates: Vec<CellRef>,
}

pub fn execute(input: &str, json: bool) -> Result<ValidationReport> {
    info!("Verifying sheet: {}", input);

    let text = read_text(input)?;
    let grid = parse_grid(&text).context("Failed to parse sheet")?;
    let report = grid.validate();

    if json {
        let output = VerifyOutput {
            dimensions: grid.dimensions(),
            valid: report.is_valid(),
            report: &report,
            candidates: report.candidates(),
        };
        let json = serde_json::to_string_pretty(&output)
            .with_context(|| "Failed to serialize validation report")?;
        println!("{}", json);
        return Ok(report);
    }

    let dims = grid.dimensions();
    println!("\n=== Verification Results ===");
    println!("Data rows:          {}", dims.rows);
    println!("Data columns:       {}", dims.columns);

    if report.combined_ok() {
        println!("Combined checksum:  {}", "ok".green());
    } else {
        println!(
            "Combined checksum:  {} (stored {:X}, computed {:X})",
            "failed".red(),
            report.combined_stored,
            report.combined_computed
        );
    }
    println!("Failed rows:        {:?}", report.failed_rows);
    println!("Failed columns:     {:?}", report.failed_columns);

    println!("\n=== Summary ===");
    if report.is_valid() {
        println!("{} All checksums match", "✓".green());
    } else if !report.combined_ok() {
        println!(
            "{} Error found in checksum, double-check the last row and last column",
            "✗".red()
        );
    } else {
        let candidates = report.candidates();
        if candidates.is_empty() {
            println!(
                "{} Checksums failed on one axis only, re-check the failed rows and columns",
                "!".yellow()
            );
        } else {
            println!("{} {} suspect cells", "✗".red(), candidates.len());
            for cell in &candidates {
                println!("  Error found: {}", cell);
            }
        }
    }

    Ok(report)
}
