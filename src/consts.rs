// src/consts.rs
//! Shared constants — cipher parameters and naming conventions

/// AES block size in bytes; also the IV length for every supported mode
pub const BLOCK_SIZE: usize = 16;

/// IV length in raw bytes
pub const IV_LEN: usize = 16;

/// IV length as a lowercase hex string
pub const IV_HEX_LEN: usize = 32;

/// Largest AES key size; longer raw keys are truncated to this
pub const MAX_KEY_LEN: usize = 32;

/// MIME type used when a file's real type is unknown or unrecoverable
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Suffix appended to encrypted artifact names
pub const ENCRYPTED_SUFFIX: &str = ".encrypted";

/// Suffix appended to restored names when the original extension is lost
pub const DECRYPTED_SUFFIX: &str = ".decrypted";
