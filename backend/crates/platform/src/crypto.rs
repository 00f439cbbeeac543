//! Cryptographic Utilities

use base64::{Engine, engine::general_purpose};
use hmac::Hmac;
use hmac::digest::InvalidLength;
use rand::{RngCore, rngs::OsRng};
use sha1::Sha1;
use sha2::Sha256;

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    fill_random(&mut bytes);
    bytes
}

/// Fill a buffer from the OS random source
///
/// `OsRng` is stateless and safe to use from any number of threads.
pub fn fill_random(buf: &mut [u8]) {
    OsRng.fill_bytes(buf);
}

/// Encode bytes as base64
pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decode base64 to bytes
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s)
}

/// PBKDF2 (RFC 8018) with HMAC-SHA1, filling `out` completely
///
/// Callers enforce the minimum round count.
pub fn pbkdf2_hmac_sha1(
    password: &[u8],
    salt: &[u8],
    rounds: u32,
    out: &mut [u8],
) -> Result<(), InvalidLength> {
    pbkdf2::pbkdf2::<Hmac<Sha1>>(password, salt, rounds, out)
}

/// PBKDF2 (RFC 8018) with HMAC-SHA256, filling `out` completely
pub fn pbkdf2_hmac_sha256(
    password: &[u8],
    salt: &[u8],
    rounds: u32,
    out: &mut [u8],
) -> Result<(), InvalidLength> {
    pbkdf2::pbkdf2::<Hmac<Sha256>>(password, salt, rounds, out)
}

/// Constant-time comparison to prevent timing attacks
///
/// Every byte pair is visited regardless of where the first difference is.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    std::hint::black_box(result) == 0
}
