// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InputValidation(String),

    #[error("invalid IV: {0}")]
    IvFormat(String),

    #[error("cipher operation failed: {0}")]
    Cipher(String),

    #[error("malformed metadata token: {0}")]
    MetadataParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("file is {size} bytes, which exceeds the configured limit of {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },
}
