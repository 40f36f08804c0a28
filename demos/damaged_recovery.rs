//! Example demonstrating how transcription errors are located

use printgrid_core::{decode_grid, encode, verify_grid, GridError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Printgrid Transcription Error Example\n");

    // Step 1: Print a sheet
    println!("Step 1: Encoding a configuration file...");
    let original = b"[server]\nhost = 10.0.0.12\nport = 8443\ntoken = 9f8e7d6c5b4a\n";
    let sheet = encode(original);
    println!("{}\n", sheet);

    // Step 2: Simulate a typist swapping two symbols in row 2
    println!("Step 2: Simulating a transcription slip...");
    let mut lines: Vec<String> = sheet.lines().map(str::to_string).collect();
    let mut cells: Vec<String> = lines[2].split(' ').map(str::to_string).collect();
    let typed: String = cells[3].chars().rev().collect();
    println!("Row 2, column 3: {} typed as {}\n", cells[3], typed);
    cells[3] = typed;
    lines[2] = cells.join(" ");
    let retyped = lines.join("\n");

    // Step 3: Verify
    println!("Step 3: Verifying the retyped sheet...");
    let report = verify_grid(&retyped)?;
    println!("  Failed rows:       {:?}", report.failed_rows);
    println!("  Failed columns:    {:?}", report.failed_columns);
    for cell in report.candidates() {
        println!("  Suspect cell:      {}", cell);
    }

    // Step 4: Decoding refuses to guess
    println!("\nStep 4: Decoding...");
    match decode_grid(&retyped) {
        Ok(_) => println!("  Sheet decoded (the slip did not change any checksum)"),
        Err(GridError::ChecksumMismatch(report)) => {
            println!("  Rejected: {}", report);
        }
        Err(e) => println!("  Rejected: {}", e),
    }

    // Step 5: The clean sheet still decodes
    let decoded = decode_grid(&sheet)?;
    assert_eq!(decoded.as_ref(), original);
    println!("\n✓ Original sheet decodes to {} bytes", decoded.len());

    Ok(())
}
