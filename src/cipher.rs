// src/cipher.rs
//! Pure symmetric cipher primitives — no I/O, no file handling
//!
//! AES under five classic modes (CBC, CFB, CTR, OFB, ECB), operating on a
//! textual domain: UTF-8 plaintext in, base64 ciphertext out, IVs as hex.
//! Everything here works on in-memory buffers.

use aes::{Aes128, Aes192, Aes256};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use cipher::block_padding::{Pkcs7, RawPadding, UnpadError};
use cipher::{
    AsyncStreamCipher, BlockDecryptMut, BlockEncryptMut, InvalidLength, KeyInit, KeyIvInit,
    StreamCipher,
};
use rand::RngCore;
use zeroize::Zeroize;

use crate::consts::{BLOCK_SIZE, IV_HEX_LEN, IV_LEN, MAX_KEY_LEN};
use crate::enums::{CipherMode, PaddingPolicy};
use crate::error::CoreError;

pub type Result<T> = std::result::Result<T, CoreError>;

/// Output of a successful encryption
///
/// The IV is always present — hex-encoded so the caller can persist it —
/// even for ECB, where it has no cryptographic effect. It is not
/// recoverable from the ciphertext; losing it loses the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherOutput {
    /// Base64-encoded ciphertext
    pub ciphertext: String,
    /// 32 lowercase hex characters (16 bytes)
    pub iv: String,
}

/// Encrypt UTF-8 text under the default padding policy
///
/// When `iv` is `None`, 16 cryptographically random bytes are generated
/// and returned in the output. A supplied IV must be 32 hex characters.
pub fn encrypt(
    plaintext: &str,
    key: &str,
    mode: CipherMode,
    iv: Option<&str>,
) -> Result<CipherOutput> {
    encrypt_with_policy(plaintext, key, mode, iv, PaddingPolicy::default())
}

pub fn encrypt_with_policy(
    plaintext: &str,
    key: &str,
    mode: CipherMode,
    iv: Option<&str>,
    padding: PaddingPolicy,
) -> Result<CipherOutput> {
    if plaintext.is_empty() {
        return Err(CoreError::InputValidation(
            "plaintext must not be empty".into(),
        ));
    }
    if key.is_empty() {
        return Err(CoreError::InputValidation("key must not be empty".into()));
    }

    let iv_bytes = match iv {
        Some(hex_iv) => parse_iv(hex_iv)?,
        None => generate_iv(),
    };

    let mut key_bytes = normalize_key(key);
    let result = encrypt_raw(plaintext.as_bytes(), &key_bytes, &iv_bytes, mode, padding);
    key_bytes.zeroize();

    Ok(CipherOutput {
        ciphertext: STANDARD.encode(result?),
        iv: hex::encode(iv_bytes),
    })
}

/// Decrypt base64 ciphertext under the default padding policy
///
/// The IV is required for every mode except ECB, where it is accepted and
/// ignored. There is no authentication: a wrong key under a padded mode
/// surfaces as a padding failure, while stream modes silently yield
/// garbage. Callers that need tamper detection must layer a MAC on top.
pub fn decrypt(ciphertext: &str, key: &str, mode: CipherMode, iv: Option<&str>) -> Result<String> {
    decrypt_with_policy(ciphertext, key, mode, iv, PaddingPolicy::default())
}

pub fn decrypt_with_policy(
    ciphertext: &str,
    key: &str,
    mode: CipherMode,
    iv: Option<&str>,
    padding: PaddingPolicy,
) -> Result<String> {
    if ciphertext.is_empty() {
        return Err(CoreError::InputValidation(
            "ciphertext must not be empty".into(),
        ));
    }
    if key.is_empty() {
        return Err(CoreError::InputValidation("key must not be empty".into()));
    }

    let iv_bytes = if mode.requires_iv() {
        match iv {
            Some(hex_iv) if !hex_iv.is_empty() => parse_iv(hex_iv)?,
            _ => {
                return Err(CoreError::IvFormat(format!(
                    "an IV is required for {mode} decryption"
                )))
            }
        }
    } else {
        // ECB: accepted but unused, even when malformed
        [0u8; IV_LEN]
    };

    let data = STANDARD
        .decode(ciphertext)
        .map_err(|e| CoreError::Cipher(format!("ciphertext is not valid base64: {e}")))?;

    let mut key_bytes = normalize_key(key);
    let result = decrypt_raw(&data, &key_bytes, &iv_bytes, mode, padding);
    key_bytes.zeroize();

    // Lossy on purpose: unauthenticated stream modes decrypt a wrong key to
    // garbage bytes, and those are handed back as-is rather than failing.
    Ok(String::from_utf8_lossy(&result?).into_owned())
}

fn encrypt_raw(
    data: &[u8],
    key: &[u8],
    iv: &[u8; IV_LEN],
    mode: CipherMode,
    padding: PaddingPolicy,
) -> Result<Vec<u8>> {
    macro_rules! run {
        ($aes:ty) => {{
            match mode {
                CipherMode::Cbc => cbc::Encryptor::<$aes>::new_from_slices(key, iv)
                    .map_err(bad_length)?
                    .encrypt_padded_vec_mut::<Pkcs7>(data),
                CipherMode::Ecb => ecb::Encryptor::<$aes>::new_from_slice(key)
                    .map_err(bad_length)?
                    .encrypt_padded_vec_mut::<Pkcs7>(data),
                CipherMode::Cfb => {
                    let mut buf = pad_for_stream(data, padding);
                    cfb_mode::Encryptor::<$aes>::new_from_slices(key, iv)
                        .map_err(bad_length)?
                        .encrypt(&mut buf);
                    buf
                }
                CipherMode::Ctr => {
                    let mut buf = pad_for_stream(data, padding);
                    ctr::Ctr128BE::<$aes>::new_from_slices(key, iv)
                        .map_err(bad_length)?
                        .apply_keystream(&mut buf);
                    buf
                }
                CipherMode::Ofb => {
                    let mut buf = pad_for_stream(data, padding);
                    ofb::Ofb::<$aes>::new_from_slices(key, iv)
                        .map_err(bad_length)?
                        .apply_keystream(&mut buf);
                    buf
                }
            }
        }};
    }

    Ok(match key.len() {
        16 => run!(Aes128),
        24 => run!(Aes192),
        _ => run!(Aes256),
    })
}

fn decrypt_raw(
    data: &[u8],
    key: &[u8],
    iv: &[u8; IV_LEN],
    mode: CipherMode,
    padding: PaddingPolicy,
) -> Result<Vec<u8>> {
    macro_rules! run {
        ($aes:ty) => {{
            match mode {
                CipherMode::Cbc => cbc::Decryptor::<$aes>::new_from_slices(key, iv)
                    .map_err(bad_length)?
                    .decrypt_padded_vec_mut::<Pkcs7>(data)
                    .map_err(unpad_failed)?,
                CipherMode::Ecb => ecb::Decryptor::<$aes>::new_from_slice(key)
                    .map_err(bad_length)?
                    .decrypt_padded_vec_mut::<Pkcs7>(data)
                    .map_err(unpad_failed)?,
                CipherMode::Cfb => {
                    let mut buf = data.to_vec();
                    cfb_mode::Decryptor::<$aes>::new_from_slices(key, iv)
                        .map_err(bad_length)?
                        .decrypt(&mut buf);
                    unpad_for_stream(buf, padding)?
                }
                CipherMode::Ctr => {
                    let mut buf = data.to_vec();
                    ctr::Ctr128BE::<$aes>::new_from_slices(key, iv)
                        .map_err(bad_length)?
                        .apply_keystream(&mut buf);
                    unpad_for_stream(buf, padding)?
                }
                CipherMode::Ofb => {
                    let mut buf = data.to_vec();
                    ofb::Ofb::<$aes>::new_from_slices(key, iv)
                        .map_err(bad_length)?
                        .apply_keystream(&mut buf);
                    unpad_for_stream(buf, padding)?
                }
            }
        }};
    }

    Ok(match key.len() {
        16 => run!(Aes128),
        24 => run!(Aes192),
        _ => run!(Aes256),
    })
}

/// Raw-key policy: the key's UTF-8 bytes are used verbatim, zero-padded up
/// to the next AES key size and truncated past 32 bytes. No KDF, no salt.
/// Insecure for human-chosen passwords; kept so existing ciphertexts stay
/// decryptable.
fn normalize_key(key: &str) -> Vec<u8> {
    let raw = key.as_bytes();
    let target = match raw.len() {
        0..=16 => 16,
        17..=24 => 24,
        _ => MAX_KEY_LEN,
    };
    let used = raw.len().min(target);
    let mut out = vec![0u8; target];
    out[..used].copy_from_slice(&raw[..used]);
    out
}

fn generate_iv() -> [u8; IV_LEN] {
    let mut iv = [0u8; IV_LEN];
    rand::rng().fill_bytes(&mut iv);
    iv
}

fn parse_iv(hex_iv: &str) -> Result<[u8; IV_LEN]> {
    if hex_iv.len() != IV_HEX_LEN {
        return Err(CoreError::IvFormat(format!(
            "IV must be {IV_HEX_LEN} hex characters, got {}",
            hex_iv.len()
        )));
    }
    let bytes =
        hex::decode(hex_iv).map_err(|_| CoreError::IvFormat("IV is not valid hex".into()))?;
    let mut iv = [0u8; IV_LEN];
    iv.copy_from_slice(&bytes);
    Ok(iv)
}

fn pad_for_stream(data: &[u8], padding: PaddingPolicy) -> Vec<u8> {
    match padding {
        PaddingPolicy::PadBlockModesOnly => data.to_vec(),
        PaddingPolicy::PadAlways => {
            let padded_len = (data.len() / BLOCK_SIZE + 1) * BLOCK_SIZE;
            let mut buf = data.to_vec();
            buf.resize(padded_len, 0);
            // raw_pad caps its slice at 255 bytes, so pad within the final
            // block only
            let tail = padded_len - BLOCK_SIZE;
            Pkcs7::raw_pad(&mut buf[tail..], data.len() - tail);
            buf
        }
    }
}

fn unpad_for_stream(buf: Vec<u8>, padding: PaddingPolicy) -> Result<Vec<u8>> {
    match padding {
        PaddingPolicy::PadBlockModesOnly => Ok(buf),
        PaddingPolicy::PadAlways => {
            // raw_unpad caps its slice at 255 bytes, so unpad within the
            // final block only (mirrors pad_for_stream)
            let tail = buf.len().saturating_sub(BLOCK_SIZE);
            let kept = Pkcs7::raw_unpad(&buf[tail..]).map_err(unpad_failed)?.len();
            let mut buf = buf;
            buf.truncate(tail + kept);
            Ok(buf)
        }
    }
}

fn bad_length(_: InvalidLength) -> CoreError {
    CoreError::Cipher("invalid key or IV length".into())
}

fn unpad_failed(_: UnpadError) -> CoreError {
    CoreError::Cipher("padding validation failed — wrong key, wrong mode, or corrupted data".into())
}
