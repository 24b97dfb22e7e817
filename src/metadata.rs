// src/metadata.rs
//! File-type metadata codec
//!
//! Serializes a small {extension, MIME type} record into an opaque,
//! reversible token: base64-wrapped JSON with short wire names. The token
//! travels alongside the IV, never inside the ciphertext.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub type Result<T> = std::result::Result<T, CoreError>;

/// Original file type, captured once at encryption time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FileMetadata {
    /// Extension without the leading dot, empty when the file had none
    #[serde(rename = "ext", default)]
    pub extension: String,
    /// Declared MIME type, empty when unknown
    #[serde(rename = "type", default)]
    pub mime_type: String,
}

impl FileMetadata {
    pub fn new(extension: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// Encode metadata into a transportable token — always succeeds
pub fn encode(metadata: &FileMetadata) -> String {
    let json =
        serde_json::to_string(metadata).expect("FileMetadata serializes to JSON infallibly");
    STANDARD.encode(json)
}

/// Decode a token back into metadata
///
/// Fails with `MetadataParse` on malformed base64 or JSON. The pipeline
/// treats that as a soft failure and substitutes defaults; only direct
/// callers ever see the error.
pub fn decode(token: &str) -> Result<FileMetadata> {
    let raw = STANDARD
        .decode(token.trim())
        .map_err(|e| CoreError::MetadataParse(format!("token is not valid base64: {e}")))?;
    serde_json::from_slice(&raw)
        .map_err(|e| CoreError::MetadataParse(format!("token payload is not valid JSON: {e}")))
}
