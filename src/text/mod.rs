//! Text processing for invisitext.
//!
//! This module provides:
//! - Code-point and grapheme-cluster iteration
//! - Bit and invisible-symbol conversion

pub mod bits;
pub mod unicode;

pub use bits::{
    bits_to_bytes, bits_to_symbols, bytes_to_bits, is_symbol, strip_symbols, symbols_to_bits,
};
pub use unicode::{codepoint_count, codepoints, grapheme_clusters, grapheme_count};
