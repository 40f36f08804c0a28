//! Constants and limits for the Printgrid sheet format

/// Base-32 alphabet (RFC 4648). Never contains `0`, `1`, `8` or `9`.
pub const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Padding symbol that fills a short final base-32 chunk
pub const PAD_CHAR: u8 = b'=';

/// Raw bytes consumed by one encode round
pub const ENCODE_CHUNK: usize = 5;

/// Symbols consumed by one decode round
pub const DECODE_CHUNK: usize = 8;

/// Base-32 characters held by every data cell
pub const GROUP_SIZE: usize = 2;

/// Upper bound on data columns used when no explicit limit is configured
pub const DEFAULT_MAX_COLUMNS: usize = 32;

/// Lower bound on data columns, so that empty input still renders a grid
pub const MIN_COLUMNS: usize = 2;

/// Column count is `round(sqrt(len) * 7 / 10)`. Kept as a ratio so the
/// computation stays in integer arithmetic.
pub const COLUMN_SCALE_NUM: u64 = 7;

/// Denominator of the column scale ratio
pub const COLUMN_SCALE_DEN: u64 = 10;

/// Fill character for the top-left header cell
pub const HEADER_FILL: char = '#';

/// Fill character marking the checksum row label and checksum column header
pub const CHECKSUM_FILL: char = 'X';

/// Explicit marker printed for blank cells in a short final data row
pub const PADDING_MARKER: &str = "--";

/// Lookup table from ASCII byte to 5-bit value; `0xFF` marks bytes outside the alphabet.
pub(crate) const DECODE_TABLE: [u8; 256] = build_decode_table(ALPHABET);

const fn build_decode_table(alphabet: &[u8; 32]) -> [u8; 256] {
    let mut table = [0xFFu8; 256];
    let mut i = 0;
    while i < alphabet.len() {
        table[alphabet[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Returns true if `c` may appear in a data cell (an alphabet symbol or padding)
pub const fn is_data_symbol(c: u8) -> bool {
    c == PAD_CHAR || DECODE_TABLE[c as usize] != 0xFF
}
