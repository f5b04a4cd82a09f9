//! # Pathsafe
//!
//! Reversible filesystem-safe text encoding and SHA-256 fingerprints.
//!
//! This crate provides:
//! - A reversible encoding of arbitrary text into tokens legal as path
//!   components on common filesystems
//! - SHA-256 fingerprints of text, rendered as lowercase hex
//! - A small, closed set of character encodings for the codec
//!
//! ## Token Alphabet
//!
//! Tokens are standard base64 with `+` replaced by `-`, `/` replaced by `_`,
//! and `=` padding retained. The substitution is a bijection over the base64
//! alphabet, so every token decodes back to exactly the original text. Tokens
//! never contain path separators, NUL, or other path-reserved characters.
//!
//! ## Example
//!
//! ```rust
//! use pathsafe::{decode, digest, encode, CharacterEncoding};
//!
//! // Derive a path-legal cache key
//! let token = encode("Hello, World!", CharacterEncoding::Utf8).unwrap();
//! assert_eq!(token, "SGVsbG8sIFdvcmxkIQ==");
//!
//! // Recover the original text
//! let text = decode(&token, CharacterEncoding::Utf8).unwrap();
//! assert_eq!(text, "Hello, World!");
//!
//! // Fingerprint for identity comparison
//! let hash = digest("Hello, World!");
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! All functions are pure and stateless: safe to call from any number of
//! threads without coordination.

mod codec;
mod digest;
mod encoding;
mod error;

pub use codec::*;
pub use digest::*;
pub use encoding::*;
pub use error::*;
