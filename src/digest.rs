// src/digest.rs
//! Message digest primitives — deterministic, stateless, no I/O
//!
//! Plain digests plus a keyed HMAC variant over the same algorithm family.
//! Both are infallible: every supported algorithm accepts any input,
//! including the empty string.

use hmac::{Hmac, Mac};
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

use crate::enums::HashAlgorithm;

/// Compute a digest and return it as a lowercase hex string
///
/// Identical input always yields an identical digest; the output length is
/// fixed per algorithm (32/40/64/128 hex characters).
pub fn hash(text: &str, algorithm: HashAlgorithm) -> String {
    match algorithm {
        HashAlgorithm::Md5 => hex_digest::<Md5>(text),
        HashAlgorithm::Sha1 => hex_digest::<Sha1>(text),
        HashAlgorithm::Sha256 => hex_digest::<Sha256>(text),
        HashAlgorithm::Sha512 => hex_digest::<Sha512>(text),
    }
}

/// Keyed HMAC over the same digest family, hex-encoded
///
/// Any key length is accepted, including empty — HMAC hashes long keys
/// and zero-pads short ones internally.
pub fn hmac(text: &str, key: &str, algorithm: HashAlgorithm) -> String {
    macro_rules! mac_hex {
        ($d:ty) => {{
            let mut mac = Hmac::<$d>::new_from_slice(key.as_bytes())
                .expect("HMAC accepts keys of any length");
            mac.update(text.as_bytes());
            hex::encode(mac.finalize().into_bytes())
        }};
    }

    match algorithm {
        HashAlgorithm::Md5 => mac_hex!(Md5),
        HashAlgorithm::Sha1 => mac_hex!(Sha1),
        HashAlgorithm::Sha256 => mac_hex!(Sha256),
        HashAlgorithm::Sha512 => mac_hex!(Sha512),
    }
}

fn hex_digest<D: Digest>(text: &str) -> String {
    hex::encode(D::digest(text.as_bytes()))
}
