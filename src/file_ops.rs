// src/file_ops.rs
//! Disk-backed wrappers around the file-envelope pipeline
//!
//! Reads and writes whole files around `pipeline`, deriving type metadata
//! from the path and enforcing the configured size cap. This is the only
//! module in the crate that performs I/O.

use std::path::Path;

use crate::config;
use crate::consts::DEFAULT_MIME_TYPE;
use crate::enums::CipherMode;
use crate::error::CoreError;
use crate::metadata::FileMetadata;
use crate::pipeline::{self, FileEnvelope, RestoredFile};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Encrypt a file on disk, writing the artifact to `output_path`
///
/// Returns the envelope so the caller can persist the IV and metadata
/// token — both are required for decryption and are not recoverable from
/// the artifact itself.
pub fn encrypt_file<P: AsRef<Path>>(
    input_path: P,
    output_path: P,
    password: &str,
    mode: CipherMode,
) -> Result<FileEnvelope> {
    let bytes = read_capped(input_path.as_ref())?;
    let metadata = metadata_for_path(input_path.as_ref());
    let envelope = pipeline::encrypt_file_bytes(&bytes, &metadata, password, mode)?;
    std::fs::write(output_path.as_ref(), &envelope.ciphertext)?;
    Ok(envelope)
}

/// Decrypt an encrypted artifact on disk, writing the restored bytes
pub fn decrypt_file<P: AsRef<Path>>(
    input_path: P,
    output_path: P,
    password: &str,
    iv: &str,
    mode: CipherMode,
    metadata_token: Option<&str>,
) -> Result<RestoredFile> {
    let artifact = read_capped(input_path.as_ref())?;
    let restored = pipeline::decrypt_file_bytes(&artifact, password, iv, mode, metadata_token)?;
    std::fs::write(output_path.as_ref(), &restored.bytes)?;
    Ok(restored)
}

/// Derive {extension, MIME type} from a path — the disk-side stand-in for
/// a browser's declared file type
pub fn metadata_for_path(path: &Path) -> FileMetadata {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let mime_type = mime_for_extension(&extension);
    FileMetadata::new(extension, mime_type)
}

fn read_capped(path: &Path) -> Result<Vec<u8>> {
    let limit = config::load().limits.max_file_size_bytes;
    let size = std::fs::metadata(path)?.len();
    if size > limit {
        return Err(CoreError::FileTooLarge { size, limit });
    }
    Ok(std::fs::read(path)?)
}

/// Minimal extension -> MIME table covering the common cases; everything
/// else degrades to the generic binary type
fn mime_for_extension(ext: &str) -> &'static str {
    match ext {
        "txt" => "text/plain",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" => "text/javascript",
        "json" => "application/json",
        "xml" => "application/xml",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        _ => DEFAULT_MIME_TYPE,
    }
}
