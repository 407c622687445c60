//! # invisitext - Hide anything in plain text
//!
//! invisitext hides a byte payload inside ordinary text as a stream of two
//! invisible Unicode variation selectors. The symbols render as nothing, yet a
//! cooperating reader can pull the exact payload back out.
//!
//! ## Overview
//!
//! - The message is optionally **compressed** (DEFLATE) and **encrypted**
//!   (passphrase, ChaCha20-Poly1305), then prefixed with a 1-byte header
//! - The payload is expanded to bits; `0` becomes U+FE0E (VS15) and `1`
//!   becomes U+FE0F (VS16)
//! - The symbols are placed in the cover text by one of three modes:
//!   - **Tail**: appended after the cover text (unbounded)
//!   - **Interleaved**: one after each code point
//!   - **Grapheme-aware**: one after each grapheme cluster, so emoji
//!     sequences stay intact
//! - Decoding auto-detects tail vs. scattered placement
//!
//! The encoded string must travel without Unicode normalization or stripping
//! of invisible characters. Nothing here detects or repairs that.
//!
//! ## Example Usage
//!
//! ```rust
//! use invisitext::{decode, encode, scan, DecoderConfig, EmbedMode, EncoderConfig};
//!
//! let cover = "Meet me by the old oak tree at noon, and bring the blue umbrella with you.";
//!
//! let config = EncoderConfig::new(EmbedMode::Interleaved).with_passphrase("hunter2");
//! let encoded = encode("ok", cover, &config);
//! // salt, nonce and tag push "ok" to 47 bytes = 376 code points; this cover is too short
//! assert!(encoded.is_err());
//!
//! let encoded = encode("ok", cover, &EncoderConfig::new(EmbedMode::Interleaved)).unwrap();
//! assert!(scan(&encoded).has_hidden_data);
//!
//! let decoded = decode(&encoded, &DecoderConfig::default()).unwrap();
//! assert_eq!(decoded, "ok");
//! ```
//!
//! ## Modules
//!
//! - [`text`]: code-point / grapheme iteration and bit ↔ symbol conversion
//! - [`header`]: the 1-byte flag header
//! - [`capacity`]: bits available per mode
//! - [`encoder`] / [`decoder`]: the codec
//! - [`scanner`]: cheap presence check
//! - [`crypto`]: compression and encryption collaborators

/// Invisible symbol for bit `0` (VARIATION SELECTOR-15).
pub const SYMBOL_0: char = '\u{FE0E}';

/// Invisible symbol for bit `1` (VARIATION SELECTOR-16).
pub const SYMBOL_1: char = '\u{FE0F}';

pub mod capacity;
pub mod config;
pub mod crypto;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod header;
pub mod mode;
pub mod scanner;
pub mod text;

// Re-export commonly used types at the crate root
pub use capacity::{capacity, Capacity};
pub use config::{ConfigError, Settings};
pub use crypto::{Cipher, Compressor, Deflate, PassphraseCipher};
pub use decoder::{decode, decode_bytes, decode_with, detect_mode, DecoderConfig, Extraction};
pub use encoder::{encode, encode_bytes, encode_with, payload_bits, EncoderConfig};
pub use error::{Result, StegoError};
pub use header::{decode_header, encode_header, Flag, Header};
pub use mode::{DecodeMode, EmbedMode};
pub use scanner::{scan, ScanReport};
