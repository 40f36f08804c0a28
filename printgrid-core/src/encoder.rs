//! Sheet encoding
//!
//! Bytes are base-32 encoded, laid out as a grid of two-symbol cells, and
//! closed with a checksum column, a checksum row and one combined checksum:
//!
//! ```text
//! ## 01 02 XX      <- column labels, checksum column marked X
//! 01 MZ XW 3C      <- row label, data cells, row checksum
//! 02 6Y TB 9A
//! 03 OI == EF
//! 04 == == 5D
//! XX 4B 2E 7      <- checksum row: column checksums, combined checksum
//! ```

use crate::base32;
use crate::constants::DEFAULT_MAX_COLUMNS;
use crate::error::GridError;
use crate::grid::{column_count, Grid};
use alloc::format;
use alloc::string::String;

#[cfg(feature = "logging")]
use tracing::debug;

/// Options controlling grid layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Upper bound on data columns per row
    pub max_columns: usize,
}

impl LayoutOptions {
    /// Create options with the default column limit
    pub const fn new() -> Self {
        Self {
            max_columns: DEFAULT_MAX_COLUMNS,
        }
    }

    /// Set the column limit
    pub fn max_columns(mut self, max_columns: usize) -> Self {
        self.max_columns = max_columns;
        self
    }

    /// Validate the options
    pub fn validate(&self) -> Result<(), GridError> {
        if self.max_columns == 0 {
            return Err(GridError::InvalidOptions(format!(
                "max_columns must be at least 1, got {}",
                self.max_columns
            )));
        }
        Ok(())
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Lay out base-32 text as a grid
pub fn layout(base32_text: &str, options: &LayoutOptions) -> Result<Grid, GridError> {
    options.validate()?;
    Ok(arrange(base32_text, options.max_columns))
}

fn arrange(base32_text: &str, max_columns: usize) -> Grid {
    let columns = column_count(base32_text.len(), max_columns);
    let grid = Grid::from_base32(base32_text, columns);

    #[cfg(feature = "logging")]
    debug!(
        "Laid out {} symbols as {} rows x {} columns",
        base32_text.len(),
        grid.dimensions().rows,
        columns
    );

    grid
}

/// Encode bytes into a grid
pub fn encode_grid(data: &[u8], options: &LayoutOptions) -> Result<Grid, GridError> {
    layout(&base32::encode(data), options)
}

/// Encode bytes into printable sheet text with default options
pub fn encode(data: &[u8]) -> String {
    arrange(&base32::encode(data), DEFAULT_MAX_COLUMNS).render()
}

/// Encode bytes into printable sheet text
pub fn encode_with(data: &[u8], options: &LayoutOptions) -> Result<String, GridError> {
    encode_grid(data, options).map(|grid| grid.render())
}
