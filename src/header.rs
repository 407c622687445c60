//! One-byte payload header.
//!
//! ```text
//! bit 0   compressed
//! bit 1   encrypted
//! bit 2-7 reserved (written as zero, ignored on read)
//! ```

use crate::error::{Result, StegoError};

/// Size of the header in bytes.
pub const HEADER_LEN: usize = 1;

/// Header flags. Closed set; each variant owns one bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Compressed,
    Encrypted,
}

impl Flag {
    pub const ALL: [Flag; 2] = [Flag::Compressed, Flag::Encrypted];

    const fn bit(self) -> u8 {
        match self {
            Flag::Compressed => 0x01,
            Flag::Encrypted => 0x02,
        }
    }
}

/// Set of [`Flag`]s carried in the header byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    flags: u8,
}

impl Header {
    pub fn new(compressed: bool, encrypted: bool) -> Self {
        let mut header = Self::default();
        if compressed {
            header.set(Flag::Compressed);
        }
        if encrypted {
            header.set(Flag::Encrypted);
        }
        header
    }

    pub fn set(&mut self, flag: Flag) {
        self.flags |= flag.bit();
    }

    pub fn contains(&self, flag: Flag) -> bool {
        self.flags & flag.bit() != 0
    }

    pub fn compressed(&self) -> bool {
        self.contains(Flag::Compressed)
    }

    pub fn encrypted(&self) -> bool {
        self.contains(Flag::Encrypted)
    }

    pub fn to_byte(self) -> u8 {
        self.flags
    }

    /// Reads the header from the start of `payload`.
    ///
    /// Returns the header and the number of bytes consumed (always
    /// [`HEADER_LEN`]). Reserved bits are dropped.
    pub fn parse(payload: &[u8]) -> Result<(Self, usize)> {
        let &byte = payload
            .first()
            .ok_or_else(|| StegoError::MalformedPayload("missing header".to_string()))?;

        let mut header = Self::default();
        for flag in Flag::ALL {
            if byte & flag.bit() != 0 {
                header.set(flag);
            }
        }
        Ok((header, HEADER_LEN))
    }
}

/// Encodes the two flags into a header byte.
pub fn encode_header(compressed: bool, encrypted: bool) -> u8 {
    Header::new(compressed, encrypted).to_byte()
}

/// Decodes a header from the front of `payload`; see [`Header::parse`].
pub fn decode_header(payload: &[u8]) -> Result<(Header, usize)> {
    Header::parse(payload)
}
