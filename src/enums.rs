// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for all #[derive(...)] enums that represent
//! user-visible choices: cipher modes, hash algorithms, padding policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Supported AES block-cipher modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum CipherMode {
    #[default]
    Cbc,
    Cfb,
    Ctr,
    Ofb,
    Ecb,
}

impl CipherMode {
    /// ECB is the only mode that carries no IV state
    pub fn requires_iv(self) -> bool {
        !matches!(self, CipherMode::Ecb)
    }

    /// True block modes get PKCS#7 padding; the rest are stream-like
    pub fn is_block_mode(self) -> bool {
        matches!(self, CipherMode::Cbc | CipherMode::Ecb)
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CipherMode::Cbc => "CBC",
            CipherMode::Cfb => "CFB",
            CipherMode::Ctr => "CTR",
            CipherMode::Ofb => "OFB",
            CipherMode::Ecb => "ECB",
        };
        f.write_str(name)
    }
}

impl FromStr for CipherMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CBC" => Ok(CipherMode::Cbc),
            "CFB" => Ok(CipherMode::Cfb),
            "CTR" => Ok(CipherMode::Ctr),
            "OFB" => Ok(CipherMode::Ofb),
            "ECB" => Ok(CipherMode::Ecb),
            other => Err(CoreError::Cipher(format!(
                "unsupported cipher mode: {other}"
            ))),
        }
    }
}

/// Supported digest algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    #[default]
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    /// Digest length in hex characters
    pub fn digest_hex_len(self) -> usize {
        match self {
            HashAlgorithm::Md5 => 32,
            HashAlgorithm::Sha1 => 40,
            HashAlgorithm::Sha256 => 64,
            HashAlgorithm::Sha512 => 128,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha1 => "SHA1",
            HashAlgorithm::Sha256 => "SHA256",
            HashAlgorithm::Sha512 => "SHA512",
        };
        f.write_str(name)
    }
}

impl FromStr for HashAlgorithm {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "").as_str() {
            "MD5" => Ok(HashAlgorithm::Md5),
            "SHA1" => Ok(HashAlgorithm::Sha1),
            "SHA256" => Ok(HashAlgorithm::Sha256),
            "SHA512" => Ok(HashAlgorithm::Sha512),
            other => Err(CoreError::InputValidation(format!(
                "unsupported hash algorithm: {other}"
            ))),
        }
    }
}

/// Whether PKCS#7 padding applies to stream-like modes (CFB/CTR/OFB)
///
/// `PadBlockModesOnly` is the correct choice for new data: stream modes
/// produce output equal in length to the input and need no padding.
/// `PadAlways` pads every mode and exists only for byte-level
/// compatibility with older producers that did the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaddingPolicy {
    #[default]
    PadBlockModesOnly,
    PadAlways,
}
