//! Error types for pathsafe

use thiserror::Error;

use crate::encoding::CharacterEncoding;

/// Errors converting text to or from bytes under a [`CharacterEncoding`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("character {character:?} is not representable in {encoding}")]
    Unrepresentable {
        encoding: CharacterEncoding,
        character: char,
    },

    #[error("byte sequence is not valid {encoding}: {detail}")]
    InvalidBytes {
        encoding: CharacterEncoding,
        detail: String,
    },
}

/// Errors rejecting a string that is not a well-formed encoded token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedTokenError {
    #[error("character {0:?} is outside the token alphabet")]
    InvalidCharacter(char),

    #[error("token length or padding is invalid: {0}")]
    BadLength(String),
}

/// Any failure from [`decode`](crate::decode).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    MalformedToken(#[from] MalformedTokenError),
}
