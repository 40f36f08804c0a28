//! Basic encoding example

use printgrid_core::{encode_grid, LayoutOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Printgrid Basic Encoding Example\n");

    let secret = b"correct horse battery staple -- recovery phrase for the offline wallet";

    // Narrow sheets are easier to type back in
    let options = LayoutOptions::new().max_columns(8);
    let grid = encode_grid(secret, &options)?;

    let dims = grid.dimensions();
    println!(
        "{} bytes -> {} rows x {} columns\n",
        secret.len(),
        dims.rows,
        dims.columns
    );

    let sheet = grid.render();
    println!("{}\n", sheet);

    std::fs::write("example_sheet.txt", &sheet)?;

    println!("Wrote example_sheet.txt");
    println!("Use 'printgrid decode --input example_sheet.txt' to read it back");

    Ok(())
}
