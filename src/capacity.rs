//! How many bits a cover text can carry in each mode.
//!
//! One bit per unit: `Interleaved` counts code points, `GraphemeAware` counts
//! grapheme clusters, `Tail` has no limit. Alphabet symbols already present in
//! the cover are not counted because the encoder drops them before placement.

use std::fmt;

use crate::mode::EmbedMode;
use crate::text::{codepoint_count, grapheme_count, strip_symbols};

/// Embedding capacity in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    Unbounded,
    Bits(usize),
}

impl Capacity {
    /// `None` when unbounded.
    pub fn bits(&self) -> Option<usize> {
        match self {
            Capacity::Unbounded => None,
            Capacity::Bits(n) => Some(*n),
        }
    }

    pub fn fits(&self, needed: usize) -> bool {
        match self {
            Capacity::Unbounded => true,
            Capacity::Bits(n) => needed <= *n,
        }
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Unbounded => f.write_str("unbounded"),
            Capacity::Bits(n) => write!(f, "{n} bits ({} bytes)", n / 8),
        }
    }
}

/// Capacity of `cover` under `mode`.
pub fn capacity(cover: &str, mode: EmbedMode) -> Capacity {
    match mode {
        EmbedMode::Tail => Capacity::Unbounded,
        EmbedMode::Interleaved => Capacity::Bits(codepoint_count(&strip_symbols(cover))),
        EmbedMode::GraphemeAware => Capacity::Bits(grapheme_count(&strip_symbols(cover))),
    }
}
