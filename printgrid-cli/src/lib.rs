//! Library entry for printgrid-cli used by integration tests and embedding.

pub mod commands;

// Re-export commands for convenience
pub use commands::*;

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read, Write};

/// Read a whole input file, or stdin when `path` is `-`
pub fn read_input(path: &str) -> Result<Vec<u8>> {
    if path == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read(path).with_context(|| format!("Failed to read input file: {}", path))
    }
}

/// Read sheet text from a file, or stdin when `path` is `-`
pub fn read_text(path: &str) -> Result<String> {
    let data = read_input(path)?;
    String::from_utf8(data).with_context(|| format!("Input is not valid UTF-8 text: {}", path))
}

/// Write to a file, or stdout when `path` is `None` or `-`
pub fn write_output(path: Option<&str>, data: &[u8]) -> Result<()> {
    match path {
        None | Some("-") => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data).context("Failed to write stdout")?;
            stdout.flush().context("Failed to flush stdout")
        }
        Some(path) => {
            fs::write(path, data).with_context(|| format!("Failed to write output file: {}", path))
        }
    }
}
