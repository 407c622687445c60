//! Message encoding.
//!
//! This module orchestrates the encoding process:
//! 1. Take the UTF-8 bytes of the message
//! 2. Compress (optional)
//! 3. Encrypt with passphrase (optional)
//! 4. Prepend the 1-byte header
//! 5. Expand to bits, then to invisible symbols
//! 6. Check the cover text's capacity for the chosen mode
//! 7. Place the symbols into the cover text

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::capacity::capacity;
use crate::crypto::{Cipher, Compressor, Deflate, PassphraseCipher};
use crate::error::{Result, StegoError};
use crate::header::{Header, HEADER_LEN};
use crate::mode::EmbedMode;
use crate::text::{bits_to_symbols, bytes_to_bits, grapheme_clusters, is_symbol, strip_symbols};

/// Configuration for the encoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Where the symbols go.
    pub mode: EmbedMode,
    /// DEFLATE the message before embedding.
    pub compress: bool,
    /// Encrypt the (possibly compressed) message.
    pub encrypt: bool,
    /// Required and non-empty when `encrypt` is set.
    #[serde(skip)]
    pub passphrase: Option<String>,
}

impl EncoderConfig {
    pub fn new(mode: EmbedMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_compression(mut self) -> Self {
        self.compress = true;
        self
    }

    /// Enables encryption under `passphrase`.
    pub fn with_passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.encrypt = true;
        self.passphrase = Some(passphrase.into());
        self
    }

    /// The passphrase to encrypt with, if encryption is requested.
    fn encryption_passphrase(&self) -> Result<Option<&str>> {
        if !self.encrypt {
            return Ok(None);
        }
        match self.passphrase.as_deref() {
            Some(p) if !p.is_empty() => Ok(Some(p)),
            _ => Err(StegoError::PassphraseRequired),
        }
    }
}

/// Hides `message` in `cover` using the default collaborators
/// (DEFLATE + ChaCha20-Poly1305).
///
/// # Example
/// ```
/// use invisitext::{decode, encode, DecoderConfig, EncoderConfig};
///
/// let encoded = encode("Hi!", "This is a test message.", &EncoderConfig::default()).unwrap();
/// assert!(encoded.starts_with("This is a test message."));
/// assert_eq!(decode(&encoded, &DecoderConfig::default()).unwrap(), "Hi!");
/// ```
pub fn encode(message: &str, cover: &str, config: &EncoderConfig) -> Result<String> {
    encode_with(message.as_bytes(), cover, config, &Deflate, &PassphraseCipher)
}

/// Hides arbitrary bytes in `cover`. Decode them with
/// [`decode_bytes`](crate::decoder::decode_bytes).
pub fn encode_bytes(data: &[u8], cover: &str, config: &EncoderConfig) -> Result<String> {
    encode_with(data, cover, config, &Deflate, &PassphraseCipher)
}

/// Hides `data` in `cover` with caller-supplied collaborators.
///
/// Nothing is returned unless the whole payload fits: the capacity check runs
/// before any placement.
pub fn encode_with(
    data: &[u8],
    cover: &str,
    config: &EncoderConfig,
    compressor: &dyn Compressor,
    cipher: &dyn Cipher,
) -> Result<String> {
    let payload = build_payload(data, config, compressor, cipher)?;
    let bits = bytes_to_bits(&payload);

    let present = cover.chars().filter(|&c| is_symbol(c)).count();
    if present > 0 {
        warn!(
            count = present,
            "removing variation selectors already in the cover text; it may render differently"
        );
    }

    let cover = strip_symbols(cover);
    let available = capacity(&cover, config.mode);
    debug!(
        mode = %config.mode,
        payload_bytes = payload.len(),
        bits = bits.len(),
        capacity = %available,
        "encoding payload"
    );

    if !available.fits(bits.len()) {
        return Err(StegoError::CapacityExceeded {
            mode: config.mode,
            needed: bits.len(),
            available: available.bits().unwrap_or(usize::MAX),
        });
    }

    let symbols = bits_to_symbols(&bits);
    Ok(place(&symbols, &cover, config.mode))
}

/// Number of bits `message` needs under `config`, header included.
///
/// Runs the compression/encryption stages but no placement. Ciphertext size
/// is deterministic, so the answer holds for a subsequent [`encode`].
pub fn payload_bits(message: &str, config: &EncoderConfig) -> Result<usize> {
    let payload = build_payload(message.as_bytes(), config, &Deflate, &PassphraseCipher)?;
    Ok(payload.len() * 8)
}

/// Builds `header || processed_body`.
fn build_payload(
    data: &[u8],
    config: &EncoderConfig,
    compressor: &dyn Compressor,
    cipher: &dyn Cipher,
) -> Result<Vec<u8>> {
    // Fail before any collaborator work if the passphrase is unusable
    let passphrase = config.encryption_passphrase()?;

    let mut body = data.to_vec();

    if config.compress {
        body = compressor
            .compress(&body)
            .map_err(StegoError::CompressionFailed)?;
        trace!(from = data.len(), to = body.len(), "compressed");
    }

    if let Some(passphrase) = passphrase {
        let plain_len = body.len();
        body = cipher
            .encrypt(&body, passphrase)
            .map_err(StegoError::EncryptionFailed)?;
        trace!(from = plain_len, to = body.len(), "encrypted");
    }

    let header = Header::new(config.compress, passphrase.is_some());

    let mut payload = Vec::with_capacity(HEADER_LEN + body.len());
    payload.push(header.to_byte());
    payload.extend(body);

    Ok(payload)
}

/// Places `symbols` into `cover` according to `mode`.
///
/// In the bounded modes each unit of cover text is followed by at most one
/// symbol; units past the end of the symbol supply pass through untouched.
fn place(symbols: &str, cover: &str, mode: EmbedMode) -> String {
    let mut result = String::with_capacity(cover.len() + symbols.len());

    match mode {
        EmbedMode::Tail => {
            result.push_str(cover);
            result.push_str(symbols);
        }
        EmbedMode::Interleaved => {
            let mut supply = symbols.chars();
            for c in cover.chars() {
                result.push(c);
                if let Some(symbol) = supply.next() {
                    result.push(symbol);
                }
            }
        }
        EmbedMode::GraphemeAware => {
            let mut supply = symbols.chars();
            for cluster in grapheme_clusters(cover) {
                result.push_str(cluster);
                if let Some(symbol) = supply.next() {
                    result.push(symbol);
                }
            }
        }
    }

    result
}
