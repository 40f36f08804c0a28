//! Short transcription checksums over a row or column of cells

use crate::alphabet::{assume_hex, correct_alphabet};
use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// One-byte checksum, printed as two hex digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checksum(u8);

impl Checksum {
    /// Wrap a raw checksum value
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Raw checksum value
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Checksum a sequence of cells
    ///
    /// Blank and whitespace-only cells are skipped; the rest are hashed in
    /// order with SHA-256, and the first digest byte is the checksum.
    /// Reordering the cells generally changes the result.
    pub fn of<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut hasher = Sha256::new();
        for cell in cells {
            let cell = cell.as_ref();
            if cell.trim().is_empty() {
                continue;
            }
            hasher.update(cell.as_bytes());
        }
        Self(hasher.finalize()[0])
    }

    /// Checksum of a checksum vector, hashed in canonical two-digit form
    pub fn of_checksums(checksums: &[Checksum]) -> Self {
        Self::of(checksums.iter().map(Checksum::to_hex))
    }

    /// Combined checksum guarding the row and column checksum vectors
    pub fn combined(row_checksums: &[Checksum], column_checksums: &[Checksum]) -> Self {
        Self(Self::of_checksums(column_checksums).0 ^ Self::of_checksums(row_checksums).0)
    }

    /// Canonical form, two uppercase hex digits
    pub fn to_hex(&self) -> String {
        alloc::format!("{:02X}", self.0)
    }

    /// Printed form, with `0`/`1` replaced by `O`/`I`
    pub fn to_printed(&self) -> String {
        correct_alphabet(&self.to_hex())
    }

    /// Printed form without zero padding, as used by the combined cell
    pub fn to_printed_short(&self) -> String {
        correct_alphabet(&alloc::format!("{:X}", self.0))
    }

    /// Read a checksum cell as transcribed
    ///
    /// Accepts one or two hex digits in either case, with `O`/`I` standing in
    /// for `0`/`1`. On failure returns the first offending character.
    pub fn parse(cell: &str) -> Result<Self, char> {
        let hex = assume_hex(&cell.to_ascii_uppercase());
        if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(bad);
        }
        if hex.is_empty() || hex.len() > 2 {
            return Err(hex.chars().nth(2).unwrap_or(' '));
        }
        u8::from_str_radix(&hex, 16).map(Self).map_err(|_| ' ')
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}", self.0)
    }
}

/// Checksum a sequence of cells and return it in canonical hex form
pub fn checksum<I, S>(cells: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Checksum::of(cells).to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn test_checksum_of_nothing() {
        // SHA-256("") = e3b0c442...
        assert_eq!(checksum(Vec::<String>::new()), "E3");
    }

    #[test]
    fn test_checksum_concatenates_cells() {
        // SHA-256("abc") = ba7816bf...
        assert_eq!(checksum(["abc"]), "BA");
        assert_eq!(checksum(["a", "bc"]), "BA");
    }

    #[test]
    fn test_blank_cells_are_skipped() {
        assert_eq!(checksum(["a", "  ", "", "bc", " "]), "BA");
    }

    #[test]
    fn test_order_matters() {
        let cells = vec!["MZ", "XW", "6Y", "TB", "OI"];
        let base = Checksum::of(&cells);
        let rotations: Vec<_> = (1..cells.len())
            .map(|n| {
                let mut rotated = cells.clone();
                rotated.rotate_left(n);
                Checksum::of(&rotated)
            })
            .collect();
        assert!(rotations.iter().any(|c| *c != base));
    }

    #[test]
    fn test_combined_is_xor_of_vectors() {
        let rows = [Checksum::new(0x12), Checksum::new(0xA0)];
        let cols = [Checksum::new(0x03)];
        let combined = Checksum::combined(&rows, &cols);
        assert_eq!(
            combined.value(),
            Checksum::of(["03"]).value() ^ Checksum::of(["12", "A0"]).value()
        );
    }

    #[test]
    fn test_printed_forms() {
        assert_eq!(Checksum::new(0x10).to_printed(), "IO");
        assert_eq!(Checksum::new(0x0B).to_printed(), "OB");
        assert_eq!(Checksum::new(0x0B).to_printed_short(), "B");
        assert_eq!(Checksum::new(0xF1).to_string(), "F1");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Checksum::parse("IO"), Ok(Checksum::new(0x10)));
        assert_eq!(Checksum::parse("0b"), Ok(Checksum::new(0x0B)));
        assert_eq!(Checksum::parse("B"), Ok(Checksum::new(0x0B)));
        assert_eq!(Checksum::parse("G1"), Err('G'));
        assert_eq!(Checksum::parse("ABC"), Err('C'));
        assert_eq!(Checksum::parse("+1"), Err('+'));
    }
}
