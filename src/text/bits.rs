//! Byte ↔ bit ↔ invisible-symbol conversion.
//!
//! Bits are most-significant first within each byte, bytes in order.

use crate::{SYMBOL_0, SYMBOL_1};

/// Returns true for either alphabet symbol.
pub fn is_symbol(c: char) -> bool {
    c == SYMBOL_0 || c == SYMBOL_1
}

/// Expands bytes to bits, MSB first. Output length is `8 * bytes.len()`.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<bool> {
    bytes
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |i| (byte >> i) & 1 == 1))
        .collect()
}

/// Packs bits into bytes, MSB first.
///
/// A trailing partial group is padded with zero bits and still produces a byte.
pub fn bits_to_bytes(bits: &[bool]) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0u8, |acc, (i, &bit)| acc | ((bit as u8) << (7 - i)))
        })
        .collect()
}

/// Maps each bit to its symbol: `false` → [`SYMBOL_0`], `true` → [`SYMBOL_1`].
pub fn bits_to_symbols(bits: &[bool]) -> String {
    bits.iter()
        .map(|&bit| if bit { SYMBOL_1 } else { SYMBOL_0 })
        .collect()
}

/// Collects every alphabet symbol in `text`, left to right, as bits.
///
/// Everything else is ignored, so this works on interleaved output as well as
/// on a bare tail of symbols.
pub fn symbols_to_bits(text: &str) -> Vec<bool> {
    text.chars()
        .filter_map(|c| match c {
            SYMBOL_0 => Some(false),
            SYMBOL_1 => Some(true),
            _ => None,
        })
        .collect()
}

/// Removes every alphabet symbol from `text`.
pub fn strip_symbols(text: &str) -> String {
    text.chars().filter(|&c| !is_symbol(c)).collect()
}
