//! Message decoding.
//!
//! This module orchestrates the decoding process:
//! 1. Work out where the symbols are (trailing run vs. scattered)
//! 2. Collect them as bits and pack to bytes
//! 3. Parse the 1-byte header
//! 4. Decrypt, then decompress, as the header says
//! 5. Return the bytes (or the UTF-8 string)
//!
//! Interleaved and grapheme-aware output decode identically: the symbol
//! values alone rebuild the bit stream, whatever visible text sits between
//! them.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::crypto::{Cipher, Compressor, Deflate, PassphraseCipher};
use crate::error::{Result, StegoError};
use crate::header::Header;
use crate::mode::{DecodeMode, EmbedMode};
use crate::text::{bits_to_bytes, is_symbol, symbols_to_bits};

/// Configuration for the decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// `Auto` infers the layout from symbol positions.
    pub mode: DecodeMode,
    /// Only consulted when the payload header says it is encrypted.
    #[serde(skip)]
    pub passphrase: Option<String>,
}

impl DecoderConfig {
    pub fn new(mode: DecodeMode) -> Self {
        Self {
            mode,
            passphrase: None,
        }
    }

    pub fn with_passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.passphrase = Some(passphrase.into());
        self
    }
}

/// How symbols are pulled out of encoded text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// The maximal run of symbols at the end of the text.
    Tail,
    /// Every symbol in the text, in document order.
    Scattered,
}

impl From<EmbedMode> for Extraction {
    fn from(mode: EmbedMode) -> Self {
        match mode {
            EmbedMode::Tail => Extraction::Tail,
            EmbedMode::Interleaved | EmbedMode::GraphemeAware => Extraction::Scattered,
        }
    }
}

/// Classifies `text` by where its symbols sit.
///
/// Fails with [`StegoError::NoHiddenData`] if there are none. If every symbol
/// belongs to the trailing run the text is `Tail`, otherwise `Scattered`.
pub fn detect_mode(text: &str) -> Result<Extraction> {
    let total = text.chars().filter(|&c| is_symbol(c)).count();
    if total == 0 {
        return Err(StegoError::NoHiddenData);
    }

    let trailing = text.chars().rev().take_while(|&c| is_symbol(c)).count();
    let extraction = if trailing == total {
        Extraction::Tail
    } else {
        Extraction::Scattered
    };

    debug!(symbols = total, trailing, ?extraction, "detected layout");
    Ok(extraction)
}

/// Recovers the hidden message as a string using the default collaborators.
///
/// Fails with [`StegoError::InvalidUtf8`] rather than returning a lossy string
/// if the recovered bytes are not UTF-8.
pub fn decode(encoded: &str, config: &DecoderConfig) -> Result<String> {
    let bytes = decode_with(encoded, config, &Deflate, &PassphraseCipher)?;
    Ok(String::from_utf8(bytes)?)
}

/// Recovers the hidden bytes using the default collaborators.
pub fn decode_bytes(encoded: &str, config: &DecoderConfig) -> Result<Vec<u8>> {
    decode_with(encoded, config, &Deflate, &PassphraseCipher)
}

/// Recovers the hidden bytes with caller-supplied collaborators.
pub fn decode_with(
    encoded: &str,
    config: &DecoderConfig,
    compressor: &dyn Compressor,
    cipher: &dyn Cipher,
) -> Result<Vec<u8>> {
    let extraction = match config.mode {
        DecodeMode::Auto => detect_mode(encoded)?,
        DecodeMode::Tail => Extraction::Tail,
        DecodeMode::Interleaved | DecodeMode::GraphemeAware => Extraction::Scattered,
    };

    let bits = symbols_to_bits(extract(encoded, extraction));
    if bits.is_empty() {
        return Err(StegoError::NoHiddenData);
    }

    let payload = bits_to_bytes(&bits);
    let (header, consumed) = Header::parse(&payload)?;
    let mut body = payload[consumed..].to_vec();
    debug!(
        ?extraction,
        bits = bits.len(),
        compressed = header.compressed(),
        encrypted = header.encrypted(),
        "recovered payload"
    );

    if header.encrypted() {
        let passphrase = config
            .passphrase
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or(StegoError::PassphraseRequired)?;
        let sealed_len = body.len();
        body = cipher
            .decrypt(&body, passphrase)
            .map_err(StegoError::DecryptionFailed)?;
        trace!(from = sealed_len, to = body.len(), "decrypted");
    }

    if header.compressed() {
        let packed_len = body.len();
        body = compressor
            .decompress(&body)
            .map_err(StegoError::DecompressionFailed)?;
        trace!(from = packed_len, to = body.len(), "decompressed");
    }

    Ok(body)
}

/// The part of `text` that holds the symbols for `extraction`.
fn extract(text: &str, extraction: Extraction) -> &str {
    match extraction {
        Extraction::Scattered => text,
        Extraction::Tail => {
            let start = text
                .char_indices()
                .rev()
                .take_while(|&(_, c)| is_symbol(c))
                .last()
                .map_or(text.len(), |(i, _)| i);
            &text[start..]
        }
    }
}
