use crate::{read_input, write_output};
use anyhow::{Context, Result};
use printgrid_core::{encode_grid, LayoutOptions};
use tracing::info;

pub fn execute(input: &str, output: Option<&str>, max_columns: usize) -> Result<()> {
    info!("Encoding file: {}", input);

    let data = read_input(input)?;
    info!("Input size: {} bytes", data.len());

    let options = LayoutOptions::new().max_columns(max_columns);
    let grid = encode_grid(&data, &options).context("Failed to lay out grid")?;

    let mut sheet = grid.render();
    sheet.push('\n');
    write_output(output, sheet.as_bytes())?;

    let dims = grid.dimensions();
    info!(
        "Encoded {} bytes as {} rows x {} columns",
        data.len(),
        dims.rows,
        dims.columns
    );

    Ok(())
}
