//! Chunked base-32 codec (RFC 4648 alphabet, `=` padding)
//!
//! Encoding consumes the input in 5-byte chunks and emits 8 symbols per chunk.
//! A short final chunk emits `ceil(bits / 5)` symbols, its low bits are zero
//! filled, and `=` pads the chunk out to 8 symbols.
//!
//! Decoding consumes 8-symbol chunks. Padding ends the useful part of a chunk,
//! and the chunk yields `floor(symbols * 5 / 8)` bytes.

use crate::constants::{ALPHABET, DECODE_CHUNK, DECODE_TABLE, ENCODE_CHUNK, PAD_CHAR};
use crate::error::GridError;
use alloc::string::String;
use bytes::{BufMut, Bytes, BytesMut};

/// Length of the base-32 text produced for `len` input bytes, padding included
pub const fn encoded_len(len: usize) -> usize {
    len.div_ceil(ENCODE_CHUNK) * DECODE_CHUNK
}

/// Encode bytes as padded base-32 text
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(data.len()));

    for chunk in data.chunks(ENCODE_CHUNK) {
        let bits = chunk.len() * 8;
        let symbols = bits.div_ceil(5);
        let shift = if symbols < DECODE_CHUNK { 5 - bits % 5 } else { 0 };

        let acc = chunk.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64) << shift;

        for i in (0..symbols).rev() {
            out.push(ALPHABET[((acc >> (i * 5)) & 0x1F) as usize] as char);
        }
        for _ in symbols..DECODE_CHUNK {
            out.push(PAD_CHAR as char);
        }
    }

    out
}

/// Decode padded base-32 text back into bytes
///
/// Any symbol outside the alphabet aborts the whole decode. A final chunk may
/// omit its padding, but it must still hold a whole number of bytes.
pub fn decode(text: &str) -> Result<Bytes, GridError> {
    let input = text.as_bytes();
    let mut buf = BytesMut::with_capacity(input.len() / DECODE_CHUNK * ENCODE_CHUNK + ENCODE_CHUNK);

    for (index, chunk) in input.chunks(DECODE_CHUNK).enumerate() {
        let base = index * DECODE_CHUNK;
        let symbols = chunk.iter().take_while(|&&c| c != PAD_CHAR).count();

        if let Some(pos) = chunk[symbols..].iter().position(|&c| c != PAD_CHAR) {
            return Err(GridError::InvalidPadding {
                offset: base + symbols + pos,
            });
        }

        let bytes = symbols * 5 / 8;
        if (bytes * 8).div_ceil(5) != symbols {
            return Err(GridError::InvalidLength(symbols));
        }
        let shift = if symbols < DECODE_CHUNK { 5 - (bytes * 8) % 5 } else { 0 };

        let mut acc = 0u64;
        for (i, &c) in chunk[..symbols].iter().enumerate() {
            let value = DECODE_TABLE[c as usize];
            if value == 0xFF {
                return Err(GridError::InvalidSymbol {
                    offset: base + i,
                    character: text
                        .get(base + i..)
                        .and_then(|s| s.chars().next())
                        .unwrap_or(c as char),
                });
            }
            acc = (acc << 5) | value as u64;
        }
        acc >>= shift;

        for i in (0..bytes).rev() {
            buf.put_u8((acc >> (i * 8)) as u8);
        }
    }

    Ok(buf.freeze())
}
