//! Quick check for hidden data without decoding it.

use serde::Serialize;

use crate::text::is_symbol;

/// What [`scan`] found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScanReport {
    pub has_hidden_data: bool,
    pub symbol_count: usize,
    pub estimated_bits: usize,
    pub estimated_bytes: usize,
}

/// Counts alphabet symbols in `text`. Never fails, never decodes.
pub fn scan(text: &str) -> ScanReport {
    let symbol_count = text.chars().filter(|&c| is_symbol(c)).count();

    ScanReport {
        has_hidden_data: symbol_count > 0,
        symbol_count,
        estimated_bits: symbol_count,
        estimated_bytes: symbol_count.div_ceil(8),
    }
}
