//! Sheet decoding (strict mode)
//!
//! Parsing rebuilds the grid from transcribed text and checks its structure.
//! Validation recomputes every checksum. Bytes are only returned when every
//! checksum matches; any mismatch rejects the whole sheet.

use crate::alphabet::correct_alphabet;
use crate::base32;
use crate::checksum::Checksum;
use crate::constants::{is_data_symbol, CHECKSUM_FILL, GROUP_SIZE, HEADER_FILL, PADDING_MARKER};
use crate::error::GridError;
use crate::grid::{Cell, Grid};
use crate::report::{CellRef, ValidationReport};
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use bytes::Bytes;

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Decode sheet text back into the original bytes
///
/// This function performs strict validation:
/// - Validates the header, row labels and cell counts
/// - Validates the alphabet of every data and checksum cell
/// - Validates the combined checksum, then every row and column checksum
///
/// Returns an error if any validation fails.
pub fn decode_grid(text: &str) -> Result<Bytes, GridError> {
    let grid = parse_grid(text)?;
    let report = grid.validate();

    if !report.is_valid() {
        #[cfg(feature = "logging")]
        warn!("Grid rejected: {}", report);
        report.into_result()?;
    }

    base32::decode(&grid.to_base32())
}

/// Parse and validate sheet text without decoding it
pub fn verify_grid(text: &str) -> Result<ValidationReport, GridError> {
    Ok(parse_grid(text)?.validate())
}

/// Parse sheet text into a grid
///
/// Blank lines are ignored and cells may be separated by any whitespace.
/// Data cells are read through [`correct_alphabet`], checksum cells as hex.
pub fn parse_grid(text: &str) -> Result<Grid, GridError> {
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
        .collect();

    if lines.len() < 2 {
        return Err(GridError::Structure {
            line: lines.last().map_or(1, |&(n, _)| n),
            reason: "expected a header row and a checksum row".to_string(),
        });
    }

    let (header_line, header) = lines[0];
    let columns = parse_header(header_line, header)?;

    let body = &lines[1..];
    let data_lines = &body[..body.len() - 1];
    let rows = data_lines.len();

    let mut data = Vec::with_capacity(rows);
    let mut row_checksums = Vec::with_capacity(rows);

    for (r, &(line_no, line)) in data_lines.iter().enumerate() {
        let is_last = r + 1 == rows;
        let tokens = split_row(line_no, line, columns, is_last)?;

        let label = tokens[0].as_str();
        if label.parse::<usize>().ok() != Some(r + 1) {
            return Err(GridError::Structure {
                line: line_no,
                reason: format!("expected row label {}, found {:?}", r + 1, label),
            });
        }

        let mut row = Vec::with_capacity(columns);
        for (c, token) in tokens[1..=columns].iter().enumerate() {
            let cell = parse_data_cell(line_no, token, CellRef::new(r + 1, c + 1))?;
            if cell == Cell::Blank && !is_last {
                return Err(GridError::Structure {
                    line: line_no,
                    reason: format!("blank cell in column {} before the last data row", c + 1),
                });
            }
            if matches!(cell, Cell::Data(_)) && row.last() == Some(&Cell::Blank) {
                return Err(GridError::Structure {
                    line: line_no,
                    reason: format!("data cell in column {} after padding", c + 1),
                });
            }
            row.push(cell);
        }

        row_checksums.push(parse_checksum_cell(
            &tokens[columns + 1],
            CellRef::new(r + 1, columns + 1),
        )?);
        data.push(row);
    }

    let (footer_line, footer) = body[body.len() - 1];
    let tokens: Vec<&str> = footer.split_whitespace().collect();
    if tokens.len() != columns + 2 {
        return Err(GridError::Structure {
            line: footer_line,
            reason: format!(
                "checksum row has {} cells, expected {}",
                tokens.len(),
                columns + 2
            ),
        });
    }
    if !is_filled_with(tokens[0], CHECKSUM_FILL) {
        return Err(GridError::Structure {
            line: footer_line,
            reason: format!("expected checksum row label, found {:?}", tokens[0]),
        });
    }

    let column_checksums = tokens[1..=columns]
        .iter()
        .enumerate()
        .map(|(c, token)| parse_checksum_cell(token, CellRef::new(rows + 1, c + 1)))
        .collect::<Result<Vec<_>, _>>()?;
    let combined = parse_checksum_cell(tokens[columns + 1], CellRef::new(rows + 1, columns + 1))?;

    #[cfg(feature = "logging")]
    debug!("Parsed grid of {} rows x {} columns", rows, columns);

    Ok(Grid::from_parts(
        columns,
        data,
        row_checksums,
        column_checksums,
        combined,
    ))
}

/// Check the header row and return the number of data columns
fn parse_header(line_no: usize, line: &str) -> Result<usize, GridError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let structure = |reason: String| GridError::Structure {
        line: line_no,
        reason,
    };

    if tokens.len() < 3 {
        return Err(structure(format!(
            "header has {} cells, expected at least 3",
            tokens.len()
        )));
    }
    if !is_filled_with(tokens[0], HEADER_FILL) {
        return Err(structure(format!(
            "expected header corner, found {:?}",
            tokens[0]
        )));
    }
    let last = tokens[tokens.len() - 1];
    if !is_filled_with(last, CHECKSUM_FILL) {
        return Err(structure(format!(
            "expected checksum column header, found {:?}",
            last
        )));
    }

    let columns = tokens.len() - 2;
    for (i, label) in tokens[1..=columns].iter().enumerate() {
        if label.parse::<usize>().ok() != Some(i + 1) {
            return Err(structure(format!(
                "expected column label {}, found {:?}",
                i + 1,
                label
            )));
        }
    }

    Ok(columns)
}

/// Tokenize a data row into label, `columns` cells and checksum
///
/// A short final row is re-read by fixed cell positions, which recovers
/// padding printed as spaces instead of the padding marker.
fn split_row(
    line_no: usize,
    line: &str,
    columns: usize,
    is_last: bool,
) -> Result<Vec<String>, GridError> {
    let expected = columns + 2;
    let tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();

    if tokens.len() == expected {
        return Ok(tokens);
    }
    if is_last && tokens.len() < expected {
        if let Some(tokens) = split_fixed_width(line, columns) {
            #[cfg(feature = "logging")]
            debug!("Line {} read by fixed cell positions", line_no);
            return Ok(tokens);
        }
    }

    Err(GridError::Structure {
        line: line_no,
        reason: format!("row has {} cells, expected {}", tokens.len(), expected),
    })
}

fn split_fixed_width(line: &str, columns: usize) -> Option<Vec<String>> {
    let rest = line.trim();
    if !rest.is_ascii() {
        return None;
    }

    let label_end = rest.find(char::is_whitespace)?;
    let stride = GROUP_SIZE + 1;
    let mut tokens = Vec::with_capacity(columns + 2);
    tokens.push(rest[..label_end].to_string());

    for c in 0..columns {
        let start = label_end + 1 + c * stride;
        let cell = rest.get(start..start + GROUP_SIZE)?.trim();
        if cell.contains(char::is_whitespace) {
            return None;
        }
        tokens.push(if cell.is_empty() {
            PADDING_MARKER.to_string()
        } else {
            cell.to_string()
        });
    }

    let checksum = rest.get(label_end + 1 + columns * stride..)?.trim();
    if checksum.is_empty() || checksum.contains(char::is_whitespace) {
        return None;
    }
    tokens.push(checksum.to_string());

    Some(tokens)
}

fn parse_data_cell(line_no: usize, token: &str, cell: CellRef) -> Result<Cell, GridError> {
    if token == PADDING_MARKER {
        return Ok(Cell::Blank);
    }

    let group = correct_alphabet(&token.to_ascii_uppercase());
    if let Some(bad) = group
        .chars()
        .find(|&c| !c.is_ascii() || !is_data_symbol(c as u8))
    {
        return Err(GridError::InvalidCell {
            cell,
            character: bad,
        });
    }
    if group.len() != GROUP_SIZE {
        return Err(GridError::Structure {
            line: line_no,
            reason: format!(
                "cell at {} holds {} symbols, expected {}",
                cell,
                group.len(),
                GROUP_SIZE
            ),
        });
    }

    Ok(Cell::Data(group))
}

fn parse_checksum_cell(token: &str, cell: CellRef) -> Result<Checksum, GridError> {
    Checksum::parse(token).map_err(|character| GridError::InvalidCell { cell, character })
}

fn is_filled_with(token: &str, fill: char) -> bool {
    !token.is_empty() && token.chars().all(|c| c.to_ascii_uppercase() == fill)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;

    #[test]
    fn test_round_trip() {
        let data = b"this is the song that never ends, this song goes on and on my friends";
        let text = encode(data);
        let decoded = decode_grid(&text).unwrap();
        assert_eq!(decoded.as_ref(), data);
    }

    #[test]
    fn test_round_trip_empty() {
        let text = encode(b"");
        assert_eq!(text.lines().count(), 2);
        assert_eq!(decode_grid(&text).unwrap().as_ref(), b"");
    }

    #[test]
    fn test_tolerates_sloppy_whitespace_and_case() {
        let text = encode(b"Hello, Printgrid!");
        let sloppy: String = text
            .lines()
            .map(|line| {
                let mut l = line.to_ascii_lowercase().replace(' ', "  \t");
                l.push_str("\r\n\n");
                l
            })
            .collect();
        let decoded = decode_grid(&format!("\n{}", sloppy)).unwrap();
        assert_eq!(decoded.as_ref(), b"Hello, Printgrid!");
    }

    #[test]
    fn test_zero_and_one_typed_for_letters() {
        // "IFBA====" holds an I; typing a 1 for it must still decode.
        let text = encode(b"AB");
        let typed = text.replacen("01 IF", "01 1F", 1);
        assert_ne!(typed, text);
        assert_eq!(decode_grid(&typed).unwrap().as_ref(), b"AB");
    }

    #[test]
    fn test_legacy_blank_padding() {
        // 112 symbols in rows of 12 leave four blank cells on the last row.
        let data = [0x42u8; 70];
        let text = encode(&data);
        assert!(text.contains(PADDING_MARKER));
        let legacy = text.replace(PADDING_MARKER, "  ");
        assert_eq!(decode_grid(&legacy).unwrap().as_ref(), &data[..]);
    }

    #[test]
    fn test_missing_checksum_row() {
        let result = parse_grid("## 01 02 XX");
        assert!(matches!(result, Err(GridError::Structure { line: 1, .. })));
    }

    #[test]
    fn test_wrong_cell_count() {
        let text = encode(b"The quick brown fox");
        let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
        lines[1].push_str(" AA");
        let result = parse_grid(&lines.join("\n"));
        assert!(matches!(result, Err(GridError::Structure { line: 2, .. })));
    }

    #[test]
    fn test_dropped_line_is_reported() {
        let text = encode(&[7u8; 64]);
        let mut lines: Vec<&str> = text.lines().collect();
        lines.remove(2);
        let result = parse_grid(&lines.join("\n"));
        assert!(matches!(result, Err(GridError::Structure { line: 3, .. })));
    }

    #[test]
    fn test_invalid_data_character() {
        let text = encode(b"AB");
        let typed = text.replacen("01 IF", "01 I8", 1);
        assert_eq!(
            parse_grid(&typed),
            Err(GridError::InvalidCell {
                cell: CellRef::new(1, 1),
                character: '8'
            })
        );
    }

    #[test]
    fn test_invalid_checksum_character() {
        let text = encode(b"AB");
        let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
        let last = lines.len() - 1;
        let mut cells: Vec<String> = lines[last].split(' ').map(str::to_string).collect();
        cells[1] = "ZZ".to_string();
        lines[last] = cells.join(" ");
        assert_eq!(
            parse_grid(&lines.join("\n")),
            Err(GridError::InvalidCell {
                cell: CellRef::new(3, 1),
                character: 'Z'
            })
        );
    }

    #[test]
    fn test_blank_cell_before_last_row() {
        let text = encode(&[7u8; 64]);
        let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
        let mut cells: Vec<String> = lines[1].split(' ').map(str::to_string).collect();
        cells[1] = PADDING_MARKER.to_string();
        lines[1] = cells.join(" ");
        let result = parse_grid(&lines.join("\n"));
        assert!(matches!(result, Err(GridError::Structure { line: 2, .. })));
    }

    #[test]
    fn test_data_cell_after_padding() {
        // Ten data rows; the last holds two cells and four padding markers.
        let text = encode(&[0x42u8; 70]);
        let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
        let last_row = lines.len() - 2;
        let mut cells: Vec<String> = lines[last_row].split(' ').map(str::to_string).collect();
        assert_eq!(cells[6], PADDING_MARKER);
        cells[6] = "AA".to_string();
        lines[last_row] = cells.join(" ");
        let result = parse_grid(&lines.join("\n"));
        assert!(matches!(result, Err(GridError::Structure { line: 11, .. })));
    }
}
