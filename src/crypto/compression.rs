//! Payload compression for invisitext.
//!
//! Uses zlib-wrapped DEFLATE so that fewer invisible symbols are needed
//! for long or repetitive messages.

use flate2::read::{ZlibDecoder, ZlibEncoder};
use flate2::Compression;
use std::io::Read;
use thiserror::Error;

use super::Compressor;

/// Ratio below which compression is considered worth enabling.
const BENEFIT_THRESHOLD: f64 = 0.9;

/// Compression errors.
#[derive(Error, Debug)]
pub enum CompressionError {
    #[error("Compression failed: {0}")]
    CompressionFailed(String),

    #[error("Decompression failed: {0}")]
    DecompressionFailed(String),
}

/// zlib/DEFLATE at maximum compression level.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deflate;

impl Compressor for Deflate {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let mut encoder = ZlibEncoder::new(data, Compression::best());
        let mut compressed = Vec::new();

        encoder
            .read_to_end(&mut compressed)
            .map_err(|e| CompressionError::CompressionFailed(e.to_string()))?;

        Ok(compressed)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CompressionError> {
        if data.is_empty() {
            return Err(CompressionError::DecompressionFailed(
                "Empty data".to_string(),
            ));
        }

        let mut decoder = ZlibDecoder::new(data);
        let mut decompressed = Vec::new();

        decoder
            .read_to_end(&mut decompressed)
            .map_err(|e| CompressionError::DecompressionFailed(e.to_string()))?;

        Ok(decompressed)
    }
}

/// Pass-through compressor. Useful for exercising the framing without DEFLATE.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Compressor for Identity {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CompressionError> {
        Ok(data.to_vec())
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CompressionError> {
        Ok(data.to_vec())
    }
}

/// Returns compressed_size / original_size for `data` under [`Deflate`].
/// Values < 1.0 mean compression helped. Empty input and compressor
/// failures both report 1.0.
pub fn estimate_compression_ratio(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 1.0;
    }

    match Deflate.compress(data) {
        Ok(compressed) => compressed.len() as f64 / data.len() as f64,
        Err(_) => 1.0,
    }
}

/// True when DEFLATE saves at least 10% on `data`.
pub fn would_benefit_from_compression(data: &[u8]) -> bool {
    estimate_compression_ratio(data) < BENEFIT_THRESHOLD
}
