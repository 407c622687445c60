//! Payload collaborators for invisitext.
//!
//! The codec never touches a concrete algorithm directly. It talks to two
//! small traits:
//! - [`Compressor`]: lossless byte compression (default: zlib/DEFLATE)
//! - [`Cipher`]: passphrase-based authenticated encryption
//!   (default: Argon2id + ChaCha20-Poly1305)
//!
//! Identity implementations ([`Identity`], [`Plaintext`]) let the framing be
//! tested in isolation.

pub mod compression;
pub mod symmetric;

pub use compression::{
    estimate_compression_ratio, would_benefit_from_compression, CompressionError, Deflate,
    Identity,
};
pub use symmetric::{CipherError, PassphraseCipher, Plaintext};

/// Lossless byte compressor. `decompress(compress(x)) == x` for all `x`.
pub trait Compressor: Send + Sync {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CompressionError>;

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CompressionError>;
}

/// Symmetric authenticated cipher keyed by a passphrase.
///
/// Ciphertexts carry their own salt and nonce, so `decrypt` only needs the
/// passphrase. A wrong passphrase must fail, never yield different plaintext.
pub trait Cipher: Send + Sync {
    fn encrypt(&self, plaintext: &[u8], passphrase: &str) -> Result<Vec<u8>, CipherError>;

    fn decrypt(&self, data: &[u8], passphrase: &str) -> Result<Vec<u8>, CipherError>;

    /// Cheap structural check; does not attempt decryption.
    fn is_encrypted(&self, data: &[u8]) -> bool;
}
