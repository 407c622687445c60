//! Unicode iteration primitives.
//!
//! Two of the embedding modes put a symbol *between* visible units, so unit
//! boundaries must be right: code points are Unicode scalar values (an astral
//! emoji is one unit, not a surrogate pair) and grapheme clusters follow
//! UAX #29 extended clusters (a ZWJ family emoji is one unit, not four).

use unicode_segmentation::UnicodeSegmentation;

/// Returns the Unicode scalar values of `text`, in order.
pub fn codepoints(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Number of code points in `text`.
pub fn codepoint_count(text: &str) -> usize {
    text.chars().count()
}

/// Splits `text` into extended grapheme clusters (user-perceived characters).
pub fn grapheme_clusters(text: &str) -> Vec<&str> {
    text.graphemes(true).collect()
}

/// Number of extended grapheme clusters in `text`.
pub fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}
