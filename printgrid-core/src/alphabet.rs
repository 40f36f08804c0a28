//! Substitutions between look-alike characters
//!
//! The data alphabet has no `0` or `1`, while hex checksums do. Sheets are
//! printed with letters only (`O`, `I`), and each cell is mapped back by what
//! its position says it holds.

use alloc::string::String;

/// Map `0` to `O` and `1` to `I`
pub fn correct_alphabet(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '0' => 'O',
            '1' => 'I',
            other => other,
        })
        .collect()
}

/// Map `O` to `0` and `I` to `1`, for cells known to hold hex digits
pub fn assume_hex(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'O' => '0',
            'I' => '1',
            other => other,
        })
        .collect()
}
