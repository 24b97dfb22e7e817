// src/lib.rs
//! cipher-toolkit — local symmetric encryption, digesting, and a
//! file-envelope format that restores original file types
//!
//! Features:
//! - AES under CBC/CFB/CTR/OFB/ECB with PKCS#7 padding where it applies
//! - MD5/SHA-1/SHA-256/SHA-512 digests plus keyed HMAC
//! - Reversible {extension, MIME type} metadata tokens for encrypted files
//! - A byte-slice pipeline plus path-based convenience wrappers
//!
//! Security caveats, by design: keys are raw user bytes with no KDF, and
//! no mode here authenticates — a wrong key can decrypt to garbage without
//! error. Callers needing tamper detection must add a MAC or use an AEAD.

pub mod cipher;
pub mod config;
pub mod consts;
pub mod digest;
pub mod enums;
pub mod error;
pub mod file_ops;
pub mod metadata;
pub mod pipeline;

// Re-export everything users need at the crate root
pub use cipher::{decrypt, decrypt_with_policy, encrypt, encrypt_with_policy, CipherOutput};
pub use config::load as load_config;
pub use digest::{hash, hmac};
pub use enums::{CipherMode, HashAlgorithm, PaddingPolicy};
pub use error::CoreError;
pub use file_ops::{decrypt_file, encrypt_file, metadata_for_path};
pub use metadata::FileMetadata;
pub use pipeline::{
    decrypt_file_bytes, decrypt_file_bytes_with_policy, encrypt_file_bytes,
    encrypt_file_bytes_with_policy, encrypted_name, restored_name, FileEnvelope, RestoredFile,
};

pub type Result<T> = std::result::Result<T, CoreError>;
