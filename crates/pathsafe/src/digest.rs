//! SHA-256 fingerprints of text

use std::fmt::Write;

use sha2::{Digest, Sha256};

/// Fingerprint text with SHA-256.
///
/// The text is hashed as UTF-8 bytes. The input encoding is fixed so the same
/// text fingerprints identically on every platform. Returns a 64-character
/// lowercase hex string; never fails, for any input including the empty
/// string.
///
/// # Example
///
/// ```rust
/// use pathsafe::digest;
///
/// let hash = digest("Hello, World!");
/// assert_eq!(hash.len(), 64);
/// assert_eq!(digest(""), "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");
/// ```
pub fn digest(input: &str) -> String {
    digest_bytes(input.as_bytes())
}

/// Fingerprint raw bytes with SHA-256.
///
/// Returns a 64-character lowercase hex string.
pub fn digest_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex_encode(&hasher.finalize())
}

/// Check whether a string has the shape of a SHA-256 fingerprint:
/// exactly 64 hex characters.
pub fn is_valid_digest(s: &str) -> bool {
    s.len() == 64 && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Verify that `data` fingerprints to `expected`.
///
/// Comparison is constant-time in the fingerprint length.
pub fn verify_digest(data: &[u8], expected: &str) -> bool {
    let computed = digest_bytes(data);
    constant_time_compare(&computed, expected)
}

fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}

/// Convert bytes to lowercase hex string
fn hex_encode(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        write!(hex, "{:02x}", byte).expect("writing to a String cannot fail");
    }
    hex
}
