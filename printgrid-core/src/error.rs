//! Error types for Printgrid operations

use crate::report::{CellRef, ValidationReport};
use alloc::string::String;

/// Errors that can occur while encoding, parsing or decoding a grid
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A base-32 symbol outside the alphabet
    #[cfg_attr(
        feature = "std",
        error("Invalid base-32 symbol {character:?} at offset {offset}")
    )]
    InvalidSymbol {
        /// Offset of the symbol in the base-32 text.
        offset: usize,
        /// The offending character.
        character: char,
    },

    /// A base-32 chunk whose length cannot carry whole bytes
    #[cfg_attr(feature = "std", error("Invalid base-32 chunk of {0} symbols"))]
    InvalidLength(usize),

    /// Data after the padding run of a chunk
    #[cfg_attr(feature = "std", error("Unexpected symbol after padding at offset {offset}"))]
    InvalidPadding {
        /// Offset of the first symbol following the padding.
        offset: usize,
    },

    /// A grid cell holding a character its position does not allow
    #[cfg_attr(feature = "std", error("Invalid character {character:?} at {cell}"))]
    InvalidCell {
        /// Location of the cell, as labelled on the sheet.
        cell: CellRef,
        /// The offending character.
        character: char,
    },

    /// Line or cell counts that do not fit the grid layout
    #[cfg_attr(feature = "std", error("Malformed grid at line {line}: {reason}"))]
    Structure {
        /// 1-based line number in the input text.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// The combined checksum does not match the checksum vectors
    #[cfg_attr(
        feature = "std",
        error("Combined checksum mismatch (stored {stored:X}, computed {computed:X}): double-check the last row and last column")
    )]
    CombinedChecksumMismatch {
        /// Value read from the bottom-right cell.
        stored: u8,
        /// Value recomputed from the stored checksum vectors.
        computed: u8,
    },

    /// One or more rows or columns failed their checksum
    #[cfg_attr(feature = "std", error("Checksum mismatch: {0}"))]
    ChecksumMismatch(ValidationReport),

    /// Layout options that cannot produce a grid
    #[cfg_attr(feature = "std", error("Invalid layout options: {0}"))]
    InvalidOptions(String),
}
