//! Grid model: tagged cells, checksum vectors and sheet rendering

use crate::checksum::Checksum;
use crate::constants::{
    CHECKSUM_FILL, COLUMN_SCALE_DEN, COLUMN_SCALE_NUM, GROUP_SIZE, HEADER_FILL, MIN_COLUMNS,
    PADDING_MARKER,
};
use crate::report::ValidationReport;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

/// One cell of a rendered sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Header row entry or row label
    Header(String),
    /// A group of base-32 symbols
    Data(String),
    /// Padding after the last data cell
    Blank,
    /// Checksum closing a data row
    RowChecksum(Checksum),
    /// Checksum closing a data column
    ColumnChecksum(Checksum),
    /// Bottom-right cell guarding both checksum vectors
    CombinedChecksum(Checksum),
}

impl Cell {
    /// Text printed for this cell
    pub fn render(&self) -> String {
        match self {
            Cell::Header(label) => label.clone(),
            Cell::Data(group) => group.clone(),
            Cell::Blank => String::from(PADDING_MARKER),
            Cell::RowChecksum(c) | Cell::ColumnChecksum(c) => c.to_printed(),
            Cell::CombinedChecksum(c) => c.to_printed_short(),
        }
    }

    /// Symbols this cell contributes to checksums and to the decoded stream
    pub fn data(&self) -> &str {
        match self {
            Cell::Data(group) => group,
            _ => "",
        }
    }
}

/// Size of the data area of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDimensions {
    /// Data rows, excluding header and checksum rows
    pub rows: usize,
    /// Data columns, excluding label and checksum columns
    pub columns: usize,
}

/// Choose the data column count for a base-32 text of `len` symbols
///
/// `round(sqrt(len) * 0.7)`, rounded down to an even number, clamped to
/// `MIN_COLUMNS..=max_columns`.
pub fn column_count(len: usize, max_columns: usize) -> usize {
    // k rounds sqrt(len) * 7/10 while (2k + 1)^2 <= 4 * len * (7/10)^2,
    // so compare squares scaled by DEN^2.
    let target = 4 * (len as u128) * (COLUMN_SCALE_NUM * COLUMN_SCALE_NUM) as u128;
    let den_sq = (COLUMN_SCALE_DEN * COLUMN_SCALE_DEN) as u128;
    let mut k: usize = 0;
    while k <= max_columns {
        let odd = (2 * k + 1) as u128;
        if odd * odd * den_sq > target {
            break;
        }
        k += 1;
    }

    let even = k - k % 2;
    even.max(MIN_COLUMNS).min(max_columns)
}

/// A complete grid: data cells plus stored checksums
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    columns: usize,
    rows: Vec<Vec<Cell>>,
    row_checksums: Vec<Checksum>,
    column_checksums: Vec<Checksum>,
    combined: Checksum,
}

impl Grid {
    /// Lay out base-32 text in rows of `columns` cells and compute every checksum
    pub fn from_base32(text: &str, columns: usize) -> Self {
        let columns = columns.max(1);
        let symbols: Vec<char> = text.chars().collect();

        let rows: Vec<Vec<Cell>> = symbols
            .chunks(columns * GROUP_SIZE)
            .map(|line| {
                let mut row: Vec<Cell> = line
                    .chunks(GROUP_SIZE)
                    .map(|group| Cell::Data(group.iter().collect()))
                    .collect();
                row.resize(columns, Cell::Blank);
                row
            })
            .collect();

        let mut grid = Self {
            columns,
            rows,
            row_checksums: Vec::new(),
            column_checksums: Vec::new(),
            combined: Checksum::new(0),
        };
        grid.row_checksums = (0..grid.rows.len())
            .map(|r| grid.computed_row_checksum(r))
            .collect();
        grid.column_checksums = (0..columns)
            .map(|c| grid.computed_column_checksum(c))
            .collect();
        grid.combined = Checksum::combined(&grid.row_checksums, &grid.column_checksums);
        grid
    }

    /// Assemble a grid from cells and checksums read off a sheet
    pub(crate) fn from_parts(
        columns: usize,
        rows: Vec<Vec<Cell>>,
        row_checksums: Vec<Checksum>,
        column_checksums: Vec<Checksum>,
        combined: Checksum,
    ) -> Self {
        Self {
            columns,
            rows,
            row_checksums,
            column_checksums,
            combined,
        }
    }

    /// Data area size
    pub fn dimensions(&self) -> GridDimensions {
        GridDimensions {
            rows: self.rows.len(),
            columns: self.columns,
        }
    }

    /// Data rows, each exactly `columns` cells wide
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Stored row checksums
    pub fn row_checksums(&self) -> &[Checksum] {
        &self.row_checksums
    }

    /// Stored column checksums
    pub fn column_checksums(&self) -> &[Checksum] {
        &self.column_checksums
    }

    /// Stored combined checksum
    pub fn combined(&self) -> Checksum {
        self.combined
    }

    /// Replace the data cell at a 0-based position, returning the old cell
    ///
    /// Stored checksums are left untouched, so this simulates a transcription
    /// slip. Returns `None` if the position is outside the data area.
    pub fn set_cell(&mut self, row: usize, column: usize, cell: Cell) -> Option<Cell> {
        let slot = self.rows.get_mut(row)?.get_mut(column)?;
        Some(core::mem::replace(slot, cell))
    }

    /// Checksum of a data row as it currently reads
    pub fn computed_row_checksum(&self, row: usize) -> Checksum {
        Checksum::of(self.rows[row].iter().map(Cell::data))
    }

    /// Checksum of a data column as it currently reads
    pub fn computed_column_checksum(&self, column: usize) -> Checksum {
        Checksum::of(self.rows.iter().map(|row| row[column].data()))
    }

    /// Recompute every checksum and compare with the stored values
    pub fn validate(&self) -> ValidationReport {
        let failed_rows = self
            .row_checksums
            .iter()
            .enumerate()
            .filter(|&(r, stored)| self.computed_row_checksum(r) != *stored)
            .map(|(r, _)| r + 1)
            .collect();
        let failed_columns = self
            .column_checksums
            .iter()
            .enumerate()
            .filter(|&(c, stored)| self.computed_column_checksum(c) != *stored)
            .map(|(c, _)| c + 1)
            .collect();

        ValidationReport {
            failed_rows,
            failed_columns,
            combined_stored: self.combined.value(),
            combined_computed: Checksum::combined(&self.row_checksums, &self.column_checksums)
                .value(),
        }
    }

    /// Data cells joined in row-major order, padding dropped
    pub fn to_base32(&self) -> String {
        self.rows.iter().flatten().map(Cell::data).collect()
    }

    /// Width of the row label column
    pub fn label_width(&self) -> usize {
        digits(self.rows.len() + 1).max(GROUP_SIZE)
    }

    /// Full sheet: header row, labelled data rows, labelled checksum row
    pub fn table(&self) -> Vec<Vec<Cell>> {
        let width = self.label_width();
        let mut table = Vec::with_capacity(self.rows.len() + 2);

        let mut header = Vec::with_capacity(self.columns + 2);
        header.push(Cell::Header(fill(HEADER_FILL, width)));
        header.extend(
            (1..=self.columns).map(|c| Cell::Header(alloc::format!("{:0>1$}", c, GROUP_SIZE))),
        );
        header.push(Cell::Header(fill(CHECKSUM_FILL, GROUP_SIZE)));
        table.push(header);

        for (r, row) in self.rows.iter().enumerate() {
            let mut line = Vec::with_capacity(self.columns + 2);
            line.push(Cell::Header(alloc::format!("{:0>1$}", r + 1, width)));
            line.extend(row.iter().cloned());
            line.push(Cell::RowChecksum(self.row_checksums[r]));
            table.push(line);
        }

        let mut footer = Vec::with_capacity(self.columns + 2);
        footer.push(Cell::Header(fill(CHECKSUM_FILL, width)));
        footer.extend(self.column_checksums.iter().copied().map(Cell::ColumnChecksum));
        footer.push(Cell::CombinedChecksum(self.combined));
        table.push(footer);

        table
    }

    /// Render the sheet as text: cells separated by one space, rows by newlines
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.table().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for (j, cell) in line.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(&cell.render())?;
            }
        }
        Ok(())
    }
}

fn fill(c: char, width: usize) -> String {
    core::iter::repeat_n(c, width).collect()
}

fn digits(mut n: usize) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
