//! Embedding strategies.
//!
//! The mode decides where symbols go in the cover text. It is never written
//! into the output; decoders infer it (see [`crate::decoder::detect_mode`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StegoError;

/// Where the encoder places invisible symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmbedMode {
    /// All symbols appended after the cover text. Unbounded capacity.
    #[default]
    Tail,
    /// One symbol after each code point of the cover text.
    Interleaved,
    /// One symbol after each grapheme cluster of the cover text.
    #[serde(alias = "zwj-aware")]
    GraphemeAware,
}

impl EmbedMode {
    pub const ALL: [EmbedMode; 3] = [
        EmbedMode::Tail,
        EmbedMode::Interleaved,
        EmbedMode::GraphemeAware,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmbedMode::Tail => "tail",
            EmbedMode::Interleaved => "interleaved",
            EmbedMode::GraphemeAware => "grapheme-aware",
        }
    }
}

impl fmt::Display for EmbedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for EmbedMode {
    type Err = StegoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tail" => Ok(EmbedMode::Tail),
            "interleaved" => Ok(EmbedMode::Interleaved),
            "grapheme-aware" | "grapheme" | "zwj-aware" => Ok(EmbedMode::GraphemeAware),
            _ => Err(StegoError::UnknownMode(s.to_string())),
        }
    }
}

/// Mode requested by a decoder. `Auto` infers it from symbol positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecodeMode {
    #[default]
    Auto,
    Tail,
    Interleaved,
    #[serde(alias = "zwj-aware")]
    GraphemeAware,
}

impl From<EmbedMode> for DecodeMode {
    fn from(mode: EmbedMode) -> Self {
        match mode {
            EmbedMode::Tail => DecodeMode::Tail,
            EmbedMode::Interleaved => DecodeMode::Interleaved,
            EmbedMode::GraphemeAware => DecodeMode::GraphemeAware,
        }
    }
}

impl fmt::Display for DecodeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeMode::Auto => f.pad("auto"),
            DecodeMode::Tail => fmt::Display::fmt(&EmbedMode::Tail, f),
            DecodeMode::Interleaved => fmt::Display::fmt(&EmbedMode::Interleaved, f),
            DecodeMode::GraphemeAware => fmt::Display::fmt(&EmbedMode::GraphemeAware, f),
        }
    }
}

impl FromStr for DecodeMode {
    type Err = StegoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            return Ok(DecodeMode::Auto);
        }
        s.parse::<EmbedMode>().map(DecodeMode::from)
    }
}
