//! Character encodings for text/byte conversion

use std::fmt;

use crate::error::EncodingError;

/// Character encodings supported by [`encode`](crate::encode) and
/// [`decode`](crate::decode).
///
/// The set is closed: the codec contract requires an exact round trip, so
/// only encodings with well-defined, total decode semantics are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterEncoding {
    /// UTF-8. Every Rust string is representable.
    Utf8,
    /// UTF-16, big-endian, no byte order mark.
    Utf16Be,
    /// UTF-16, little-endian, no byte order mark.
    Utf16Le,
    /// 7-bit ASCII. Encoding fails for non-ASCII text.
    Ascii,
}

impl CharacterEncoding {
    /// Serialize text to raw bytes under this encoding.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::Unrepresentable`] if `text` contains a
    /// character with no representation in this encoding. Only possible for
    /// [`CharacterEncoding::Ascii`]; UTF-8 and UTF-16 are total for Rust
    /// strings.
    pub fn encode_text(&self, text: &str) -> Result<Vec<u8>, EncodingError> {
        match self {
            CharacterEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
            CharacterEncoding::Utf16Be => Ok(text
                .encode_utf16()
                .flat_map(|unit| unit.to_be_bytes())
                .collect()),
            CharacterEncoding::Utf16Le => Ok(text
                .encode_utf16()
                .flat_map(|unit| unit.to_le_bytes())
                .collect()),
            CharacterEncoding::Ascii => match text.chars().find(|c| !c.is_ascii()) {
                None => Ok(text.as_bytes().to_vec()),
                Some(character) => Err(EncodingError::Unrepresentable {
                    encoding: *self,
                    character,
                }),
            },
        }
    }

    /// Deserialize raw bytes back to text under this encoding.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::InvalidBytes`] if `bytes` is not a valid
    /// sequence under this encoding: malformed UTF-8, an odd byte count or
    /// unpaired surrogate for UTF-16, or a byte above 0x7F for ASCII.
    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<String, EncodingError> {
        match self {
            CharacterEncoding::Utf8 => String::from_utf8(bytes.to_vec()).map_err(|e| {
                EncodingError::InvalidBytes {
                    encoding: *self,
                    detail: e.utf8_error().to_string(),
                }
            }),
            CharacterEncoding::Utf16Be => decode_utf16_units(*self, bytes, u16::from_be_bytes),
            CharacterEncoding::Utf16Le => decode_utf16_units(*self, bytes, u16::from_le_bytes),
            CharacterEncoding::Ascii => {
                if bytes.is_ascii() {
                    // ASCII bytes are valid UTF-8 by construction
                    Ok(String::from_utf8_lossy(bytes).into_owned())
                } else {
                    Err(EncodingError::InvalidBytes {
                        encoding: *self,
                        detail: "byte value above 0x7f".to_string(),
                    })
                }
            }
        }
    }
}

fn decode_utf16_units(
    encoding: CharacterEncoding,
    bytes: &[u8],
    from_bytes: fn([u8; 2]) -> u16,
) -> Result<String, EncodingError> {
    if bytes.len() % 2 != 0 {
        return Err(EncodingError::InvalidBytes {
            encoding,
            detail: format!("odd byte count {} for UTF-16", bytes.len()),
        });
    }
    let units = bytes.chunks_exact(2).map(|pair| from_bytes([pair[0], pair[1]]));
    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|e| EncodingError::InvalidBytes {
            encoding,
            detail: format!("unpaired surrogate 0x{:04x}", e.unpaired_surrogate()),
        })
}

impl fmt::Display for CharacterEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharacterEncoding::Utf8 => "UTF-8",
            CharacterEncoding::Utf16Be => "UTF-16BE",
            CharacterEncoding::Utf16Le => "UTF-16LE",
            CharacterEncoding::Ascii => "ASCII",
        };
        f.write_str(name)
    }
}
