//! Error type for the codec.

use thiserror::Error;

use crate::crypto::{CipherError, CompressionError};
use crate::mode::EmbedMode;

/// Errors that can occur while encoding or decoding hidden payloads.
///
/// No operation returns partial output: an encode either yields the full
/// encoded text or one of these, and likewise for decode.
#[derive(Error, Debug)]
pub enum StegoError {
    #[error("Passphrase is required for encrypted payloads")]
    PassphraseRequired,

    #[error("Message too long for {mode} mode: need {needed} bits, cover text holds {available}")]
    CapacityExceeded {
        mode: EmbedMode,
        needed: usize,
        available: usize,
    },

    #[error("No hidden data found")]
    NoHiddenData,

    #[error("Invalid payload: {0}")]
    MalformedPayload(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(#[source] CipherError),

    #[error("Decryption failed: {0}")]
    DecryptionFailed(#[source] CipherError),

    #[error("Compression failed: {0}")]
    CompressionFailed(#[source] CompressionError),

    #[error("Decompression failed: {0}")]
    DecompressionFailed(#[source] CompressionError),

    #[error("Recovered payload is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("Unknown mode: {0}")]
    UnknownMode(String),
}

pub type Result<T> = std::result::Result<T, StegoError>;
