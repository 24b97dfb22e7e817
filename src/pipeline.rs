// src/pipeline.rs
//! File-envelope pipeline over in-memory byte slices
//!
//! The only component that touches raw file bytes. Encryption transcodes
//! the bytes into the cipher's textual domain (base64), encrypts, and
//! packages the result with the IV and a metadata token; decryption runs
//! the same steps in reverse. Host-independent by design — disk access
//! lives in `file_ops`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::cipher;
use crate::consts::{DECRYPTED_SUFFIX, DEFAULT_MIME_TYPE, ENCRYPTED_SUFFIX};
use crate::enums::{CipherMode, PaddingPolicy};
use crate::error::CoreError;
use crate::metadata::{self, FileMetadata};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Artifact produced by a single encrypt call
///
/// All three fields must be retained by the caller; losing any one makes
/// the file unrecoverable. The core holds no state between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEnvelope {
    /// Textual ciphertext as bytes, suitable for writing straight to disk
    /// tagged `application/octet-stream`
    pub ciphertext: Vec<u8>,
    /// 32 lowercase hex characters — transmitted out-of-band with the password
    pub iv: String,
    /// Opaque token carrying the original extension and MIME type
    pub metadata_token: String,
}

/// Result of a single decrypt call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoredFile {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    /// Original extension recovered from the metadata token, possibly empty
    pub extension: String,
}

/// Encrypt raw file bytes into a `FileEnvelope`
pub fn encrypt_file_bytes(
    bytes: &[u8],
    metadata: &FileMetadata,
    password: &str,
    mode: CipherMode,
) -> Result<FileEnvelope> {
    encrypt_file_bytes_with_policy(bytes, metadata, password, mode, PaddingPolicy::default())
}

pub fn encrypt_file_bytes_with_policy(
    bytes: &[u8],
    metadata: &FileMetadata,
    password: &str,
    mode: CipherMode,
    padding: PaddingPolicy,
) -> Result<FileEnvelope> {
    if bytes.is_empty() {
        return Err(CoreError::InputValidation("file is empty".into()));
    }

    let metadata_token = metadata::encode(metadata);
    let transcoded = STANDARD.encode(bytes);
    let output = cipher::encrypt_with_policy(&transcoded, password, mode, None, padding)?;

    log::debug!(
        "encrypted {} file bytes under {mode} ({} ciphertext bytes)",
        bytes.len(),
        output.ciphertext.len()
    );

    Ok(FileEnvelope {
        ciphertext: output.ciphertext.into_bytes(),
        iv: output.iv,
        metadata_token,
    })
}

/// Decrypt an encrypted artifact back into raw bytes plus its MIME type
///
/// A missing or corrupted metadata token never aborts the operation: the
/// restored file degrades to `application/octet-stream` with no extension.
pub fn decrypt_file_bytes(
    artifact: &[u8],
    password: &str,
    iv: &str,
    mode: CipherMode,
    metadata_token: Option<&str>,
) -> Result<RestoredFile> {
    decrypt_file_bytes_with_policy(
        artifact,
        password,
        iv,
        mode,
        metadata_token,
        PaddingPolicy::default(),
    )
}

pub fn decrypt_file_bytes_with_policy(
    artifact: &[u8],
    password: &str,
    iv: &str,
    mode: CipherMode,
    metadata_token: Option<&str>,
    padding: PaddingPolicy,
) -> Result<RestoredFile> {
    // Ciphertext is textual; lossy keeps truncated or mangled artifacts on
    // the normal error path instead of a separate UTF-8 one
    let text = String::from_utf8_lossy(artifact);
    let plaintext = cipher::decrypt_with_policy(&text, password, mode, iv_arg(iv), padding)?;

    let bytes = STANDARD.decode(plaintext.as_bytes()).map_err(|_| {
        CoreError::Cipher(
            "decrypted content is not the expected base64 — wrong password, mode, or IV".into(),
        )
    })?;

    let metadata = resolve_metadata(metadata_token);
    let mime_type = if metadata.mime_type.is_empty() {
        DEFAULT_MIME_TYPE.to_string()
    } else {
        metadata.mime_type
    };

    log::debug!("decrypted {} bytes as {mime_type}", bytes.len());

    Ok(RestoredFile {
        bytes,
        mime_type,
        extension: metadata.extension,
    })
}

/// Soft-fail metadata resolution: malformed tokens log a warning and fall
/// back to defaults, they never abort decryption
fn resolve_metadata(token: Option<&str>) -> FileMetadata {
    match token {
        Some(t) if !t.is_empty() => match metadata::decode(t) {
            Ok(m) => m,
            Err(err) => {
                log::warn!("ignoring unreadable metadata token ({err}), using {DEFAULT_MIME_TYPE}");
                FileMetadata::default()
            }
        },
        _ => FileMetadata::default(),
    }
}

fn iv_arg(iv: &str) -> Option<&str> {
    if iv.is_empty() {
        None
    } else {
        Some(iv)
    }
}

/// Artifact name for an encrypted file: base name plus `.encrypted`
///
/// The true extension is deliberately not part of the name — it lives only
/// in the metadata token.
pub fn encrypted_name(original: &str) -> String {
    format!("{}{ENCRYPTED_SUFFIX}", base_name(original))
}

/// Name for a restored file: strip `.encrypted` and re-attach the
/// extension recovered from metadata, or fall back to `.decrypted`
pub fn restored_name(artifact_name: &str, metadata: &FileMetadata) -> String {
    match artifact_name.strip_suffix(ENCRYPTED_SUFFIX) {
        Some(base) if !metadata.extension.is_empty() => {
            format!("{base}.{}", metadata.extension)
        }
        Some(base) => base.to_string(),
        None => format!("{artifact_name}{DECRYPTED_SUFFIX}"),
    }
}

fn base_name(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    }
}
