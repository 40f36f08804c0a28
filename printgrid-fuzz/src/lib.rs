//! Fuzzing entry points for printgrid-core
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_decode_grid

pub fn fuzz_decode_grid(data: &[u8]) {
    use printgrid_core::decode_grid;

    // Sheets are text; anything else is rejected before parsing
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = decode_grid(text);
    }
}

pub fn fuzz_decode_base32(data: &[u8]) {
    use printgrid_core::base32;

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = base32::decode(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzz_decode_grid_empty() {
        fuzz_decode_grid(&[]);
    }

    #[test]
    fn test_fuzz_decode_grid_truncated_sheet() {
        let sheet = printgrid_core::encode(b"truncate me somewhere in the middle");
        for cut in 0..sheet.len() {
            fuzz_decode_grid(&sheet.as_bytes()[..cut]);
        }
    }

    #[test]
    fn test_fuzz_decode_base32_random() {
        fuzz_decode_base32(b"=======A");
        fuzz_decode_base32(&[0xFF; 64]);
        fuzz_decode_base32("\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}".as_bytes());
    }
}
