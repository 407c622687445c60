//! Symmetric encryption with passphrase for invisitext.
//!
//! This module provides passphrase-based symmetric encryption using:
//! - Argon2id to stretch the passphrase with a per-message salt
//! - HKDF-SHA256 to expand the stretched secret into the cipher key
//! - ChaCha20-Poly1305 for authenticated encryption
//!
//! The output is self-describing: `salt (16) || nonce (12) || ciphertext+tag`.

use argon2::{Algorithm, Argon2, Params, Version};
use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Nonce,
};
use hkdf::Hkdf;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use thiserror::Error;

use super::Cipher;

/// HKDF info string for passphrase-based key derivation.
const HKDF_INFO: &[u8] = b"INVISITEXT-V1-SYMMETRIC";

/// Argon2id memory cost in KiB.
pub const ARGON2_MEMORY_KIB: u32 = 19 * 1024;

/// Argon2id passes over memory.
pub const ARGON2_ITERATIONS: u32 = 2;

/// Argon2id lanes.
pub const ARGON2_LANES: u32 = 1;

/// Random salt prepended to every ciphertext.
pub const SALT_SIZE: usize = 16;

/// Nonce size for ChaCha20Poly1305.
pub const NONCE_SIZE: usize = 12;

/// Poly1305 authentication tag size.
pub const TAG_SIZE: usize = 16;

/// Errors that can occur during symmetric encryption.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("Passphrase is required")]
    PassphraseRequired,

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed (wrong passphrase or corrupted data)")]
    DecryptionFailed,

    #[error("Invalid ciphertext: too short ({0} bytes)")]
    CiphertextTooShort(usize),

    #[error("Key derivation failed")]
    KeyDerivationFailed,
}

/// Argon2id instance with the pinned cost parameters.
fn argon2() -> Result<Argon2<'static>, CipherError> {
    let params = Params::new(ARGON2_MEMORY_KIB, ARGON2_ITERATIONS, ARGON2_LANES, Some(32))
        .map_err(|_| CipherError::KeyDerivationFailed)?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Derives a 256-bit symmetric key from a passphrase and salt.
fn derive_key(passphrase: &str, salt: &[u8]) -> Result<[u8; 32], CipherError> {
    let mut stretched = [0u8; 32];
    argon2()?
        .hash_password_into(passphrase.as_bytes(), salt, &mut stretched)
        .map_err(|_| CipherError::KeyDerivationFailed)?;

    let hk = Hkdf::<Sha256>::new(None, &stretched);
    let mut key = [0u8; 32];
    hk.expand(HKDF_INFO, &mut key)
        .map_err(|_| CipherError::KeyDerivationFailed)?;
    Ok(key)
}

/// Passphrase cipher: Argon2id + ChaCha20-Poly1305 with random salt and nonce.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassphraseCipher;

impl Cipher for PassphraseCipher {
    fn encrypt(&self, plaintext: &[u8], passphrase: &str) -> Result<Vec<u8>, CipherError> {
        if passphrase.is_empty() {
            return Err(CipherError::PassphraseRequired);
        }

        let mut salt = [0u8; SALT_SIZE];
        let mut nonce_bytes = [0u8; NONCE_SIZE];
        OsRng.fill_bytes(&mut salt);
        OsRng.fill_bytes(&mut nonce_bytes);

        let key = derive_key(passphrase, &salt)?;
        let cipher = ChaCha20Poly1305::new_from_slice(&key)
            .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

        let ciphertext = cipher
            .encrypt(Nonce::from_slice(&nonce_bytes), plaintext)
            .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

        let mut result = Vec::with_capacity(SALT_SIZE + NONCE_SIZE + ciphertext.len());
        result.extend_from_slice(&salt);
        result.extend_from_slice(&nonce_bytes);
        result.extend_from_slice(&ciphertext);

        Ok(result)
    }

    fn decrypt(&self, data: &[u8], passphrase: &str) -> Result<Vec<u8>, CipherError> {
        if passphrase.is_empty() {
            return Err(CipherError::PassphraseRequired);
        }

        if data.len() < SALT_SIZE + NONCE_SIZE + TAG_SIZE {
            return Err(CipherError::CiphertextTooShort(data.len()));
        }

        let (salt, rest) = data.split_at(SALT_SIZE);
        let (nonce_bytes, ciphertext) = rest.split_at(NONCE_SIZE);

        let key = derive_key(passphrase, salt)?;
        let cipher =
            ChaCha20Poly1305::new_from_slice(&key).map_err(|_| CipherError::KeyDerivationFailed)?;

        cipher
            .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
            .map_err(|_| CipherError::DecryptionFailed)
    }

    fn is_encrypted(&self, data: &[u8]) -> bool {
        data.len() >= SALT_SIZE + NONCE_SIZE
    }
}

/// Identity "cipher" that ignores the passphrase. Test double only.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plaintext;

impl Cipher for Plaintext {
    fn encrypt(&self, plaintext: &[u8], _passphrase: &str) -> Result<Vec<u8>, CipherError> {
        Ok(plaintext.to_vec())
    }

    fn decrypt(&self, data: &[u8], _passphrase: &str) -> Result<Vec<u8>, CipherError> {
        Ok(data.to_vec())
    }

    fn is_encrypted(&self, _data: &[u8]) -> bool {
        false
    }
}
