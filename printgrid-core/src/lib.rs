//! # Printgrid Core
//!
//! A paper-friendly encoding for binary data: bytes become a grid of short
//! base-32 cells with a checksum on every row and column, so a sheet that was
//! printed and typed back in by hand either decodes exactly or is rejected with
//! the coordinates of the suspect cells.
//!
//! ## Modules
//!
//! - `constants`: Alphabet, chunk sizes and layout constants
//! - `base32`: Chunked base-32 codec
//! - `checksum`: Row/column checksums
//! - `alphabet`: `0`/`O` and `1`/`I` substitutions
//! - `grid`: Grid model and sheet rendering
//! - `encoder`: Bytes to sheet
//! - `decoder`: Sheet to bytes, with validation
//! - `report`: Validation results and suspect cells

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod alphabet;
pub mod base32;
pub mod checksum;
pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod grid;
pub mod report;

// Re-export commonly used types
pub use checksum::Checksum;
pub use decoder::{decode_grid, parse_grid, verify_grid};
pub use encoder::{encode, encode_grid, encode_with, LayoutOptions};
pub use error::GridError;
pub use grid::{Cell, Grid, GridDimensions};
pub use report::{CellRef, ValidationReport};

/// Result type alias for Printgrid operations
pub type Result<T> = core::result::Result<T, GridError>;
