//! Validation results and suspect cell locations

use crate::error::GridError;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

/// A cell position as labelled on the printed sheet
///
/// Rows and columns are 1-based. Row `rows + 1` is the checksum row and
/// column `columns + 1` is the checksum column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellRef {
    /// Row label
    pub row: usize,
    /// Column label
    pub column: usize,
}

impl CellRef {
    /// Create a new cell reference
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, column {}", self.row, self.column)
    }
}

/// Outcome of recomputing every checksum of a grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Rows whose checksum does not match, ascending
    pub failed_rows: Vec<usize>,
    /// Columns whose checksum does not match, ascending
    pub failed_columns: Vec<usize>,
    /// Combined checksum read from the sheet
    pub combined_stored: u8,
    /// Combined checksum recomputed from the stored checksum vectors
    pub combined_computed: u8,
}

impl ValidationReport {
    /// True if the combined checksum matches
    pub fn combined_ok(&self) -> bool {
        self.combined_stored == self.combined_computed
    }

    /// True if every checksum matches
    pub fn is_valid(&self) -> bool {
        self.combined_ok() && self.failed_rows.is_empty() && self.failed_columns.is_empty()
    }

    /// Every (failed row, failed column) pair
    ///
    /// Empty when the combined checksum fails, since a bad checksum vector
    /// cannot be trusted to point at data cells.
    pub fn candidates(&self) -> Vec<CellRef> {
        if !self.combined_ok() {
            return Vec::new();
        }
        self.failed_rows
            .iter()
            .flat_map(|&row| {
                self.failed_columns
                    .iter()
                    .map(move |&column| CellRef::new(row, column))
            })
            .collect()
    }

    /// Apply the rejection policy
    ///
    /// A combined checksum failure takes precedence over any row or column
    /// failure. Any failure rejects the grid.
    pub fn into_result(self) -> Result<(), GridError> {
        if !self.combined_ok() {
            return Err(GridError::CombinedChecksumMismatch {
                stored: self.combined_stored,
                computed: self.combined_computed,
            });
        }
        if !self.is_valid() {
            return Err(GridError::ChecksumMismatch(self));
        }
        Ok(())
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "all checksums match");
        }
        if !self.combined_ok() {
            return write!(f, "combined checksum failed, check the last row and last column");
        }
        write!(
            f,
            "rows {:?} and columns {:?} failed",
            self.failed_rows, self.failed_columns
        )?;
        let candidates = self.candidates();
        if !candidates.is_empty() {
            write!(f, "; suspect cells:")?;
            for cell in candidates {
                write!(f, " ({}, {})", cell.row, cell.column)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn report(rows: Vec<usize>, columns: Vec<usize>, stored: u8, computed: u8) -> ValidationReport {
        ValidationReport {
            failed_rows: rows,
            failed_columns: columns,
            combined_stored: stored,
            combined_computed: computed,
        }
    }

    #[test]
    fn test_valid_report() {
        let r = report(vec![], vec![], 0x4A, 0x4A);
        assert!(r.is_valid());
        assert!(r.into_result().is_ok());
    }

    #[test]
    fn test_candidates_are_cross_product() {
        let r = report(vec![1, 3], vec![2, 5], 7, 7);
        assert_eq!(
            r.candidates(),
            vec![
                CellRef::new(1, 2),
                CellRef::new(1, 5),
                CellRef::new(3, 2),
                CellRef::new(3, 5),
            ]
        );
    }

    #[test]
    fn test_combined_failure_wins() {
        let r = report(vec![2], vec![4], 0x10, 0x11);
        assert!(r.candidates().is_empty());
        assert_eq!(
            r.into_result(),
            Err(GridError::CombinedChecksumMismatch {
                stored: 0x10,
                computed: 0x11
            })
        );
    }

    #[test]
    fn test_single_axis_failure_rejects_without_candidates() {
        let r = report(vec![2], vec![], 9, 9);
        assert!(r.candidates().is_empty());
        assert!(matches!(r.into_result(), Err(GridError::ChecksumMismatch(_))));
    }

    #[test]
    fn test_display() {
        let r = report(vec![1], vec![2], 3, 3);
        assert_eq!(
            r.to_string(),
            "rows [1] and columns [2] failed; suspect cells: (1, 2)"
        );
        assert_eq!(CellRef::new(4, 7).to_string(), "row 4, column 7");
    }
}
