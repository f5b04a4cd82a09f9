//! Reversible filesystem-safe encoding of arbitrary text
//!
//! Tokens are standard base64 with the two path-hostile alphabet members
//! substituted: `+` becomes `-` and `/` becomes `_`; `=` padding is kept as-is
//! since it is legal in path components. The substitution is a bijection over
//! the base64 alphabet, so decoding is unambiguous for every valid token.

use base64::{engine::general_purpose::URL_SAFE as BASE64_FS, Engine};

use crate::encoding::CharacterEncoding;
use crate::error::{CodecError, EncodingError, MalformedTokenError};

/// Encode text as a filesystem-safe token.
///
/// The text is serialized to bytes under `encoding`, then base64-encoded over
/// the `[A-Za-z0-9_-]` alphabet with `=` padding. The result contains no path
/// separators, NUL, or other path-reserved characters, for any input.
///
/// # Errors
///
/// Returns [`EncodingError`] if `input` is not representable in `encoding`.
/// UTF-8 and UTF-16 never fail; ASCII fails on non-ASCII text.
///
/// # Example
///
/// ```rust
/// use pathsafe::{encode, CharacterEncoding};
///
/// let token = encode("Hello, World!", CharacterEncoding::Utf8).unwrap();
/// assert_eq!(token, "SGVsbG8sIFdvcmxkIQ==");
/// ```
pub fn encode(input: &str, encoding: CharacterEncoding) -> Result<String, EncodingError> {
    let bytes = encoding.encode_text(input)?;
    Ok(encode_bytes(&bytes))
}

/// Decode a token produced by [`encode`] back to the original text.
///
/// Decoding is strict: the token must use only the filesystem-safe alphabet
/// and carry canonical base64 padding. A truncated or corrupted token is
/// rejected, never silently decoded to garbage text.
///
/// # Errors
///
/// Returns [`CodecError::MalformedToken`] if `token` is not a well-formed
/// encoded token, or [`CodecError::Encoding`] if the decoded bytes are not
/// valid under `encoding`.
///
/// # Example
///
/// ```rust
/// use pathsafe::{decode, CharacterEncoding};
///
/// let text = decode("SGVsbG8sIFdvcmxkIQ==", CharacterEncoding::Utf8).unwrap();
/// assert_eq!(text, "Hello, World!");
/// ```
pub fn decode(token: &str, encoding: CharacterEncoding) -> Result<String, CodecError> {
    let bytes = decode_bytes(token)?;
    Ok(encoding.decode_bytes(&bytes)?)
}

/// Encode raw bytes as a filesystem-safe token.
pub fn encode_bytes(data: &[u8]) -> String {
    BASE64_FS.encode(data)
}

/// Decode a filesystem-safe token to raw bytes.
///
/// # Errors
///
/// Returns [`MalformedTokenError`] for characters outside the token alphabet
/// or for a length/padding inconsistent with valid base64.
pub fn decode_bytes(token: &str) -> Result<Vec<u8>, MalformedTokenError> {
    BASE64_FS.decode(token).map_err(|e| match e {
        base64::DecodeError::InvalidByte(_, byte) => {
            MalformedTokenError::InvalidCharacter(byte as char)
        }
        other => MalformedTokenError::BadLength(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_token() {
        let token = encode("Hello, World!", CharacterEncoding::Utf8).unwrap();
        assert_eq!(token, "SGVsbG8sIFdvcmxkIQ==");
        assert_eq!(
            decode(&token, CharacterEncoding::Utf8).unwrap(),
            "Hello, World!"
        );
    }

    #[test]
    fn test_empty_string_round_trip() {
        for encoding in [
            CharacterEncoding::Utf8,
            CharacterEncoding::Utf16Be,
            CharacterEncoding::Utf16Le,
            CharacterEncoding::Ascii,
        ] {
            let token = encode("", encoding).unwrap();
            assert_eq!(token, "");
            assert_eq!(decode(&token, encoding).unwrap(), "");
        }
    }

    #[test]
    fn test_substitution_avoids_plus_and_slash() {
        // 0xfb 0xff base64-encodes to "+/8=" under the standard alphabet
        let token = encode_bytes(&[0xfb, 0xff]);
        assert_eq!(token, "-_8=");
        assert_eq!(decode_bytes(&token).unwrap(), vec![0xfb, 0xff]);
    }

    #[test]
    fn test_standard_alphabet_rejected() {
        let err = decode_bytes("+/8=").unwrap_err();
        assert_eq!(err, MalformedTokenError::InvalidCharacter('+'));
    }

    #[test]
    fn test_invalid_character_rejected() {
        let err = decode("abc!", CharacterEncoding::Utf8).unwrap_err();
        assert!(matches!(
            err,
            CodecError::MalformedToken(MalformedTokenError::InvalidCharacter('!'))
        ));
    }

    #[test]
    fn test_truncated_token_rejected() {
        // Valid alphabet, but length % 4 == 1 is never valid base64
        let err = decode("SGVsbG8sA", CharacterEncoding::Utf8).unwrap_err();
        assert!(matches!(
            err,
            CodecError::MalformedToken(MalformedTokenError::BadLength(_))
        ));
    }

    #[test]
    fn test_missing_padding_rejected() {
        let err = decode("SGVsbG8sIFdvcmxkIQ", CharacterEncoding::Utf8).unwrap_err();
        assert!(matches!(err, CodecError::MalformedToken(_)));
    }

    #[test]
    fn test_valid_token_invalid_utf8_is_encoding_error() {
        // "__79" decodes to 0xff 0xfe 0xfd, not valid UTF-8
        let err = decode("__79", CharacterEncoding::Utf8).unwrap_err();
        assert!(matches!(err, CodecError::Encoding(_)));
    }
}
