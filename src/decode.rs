//! Decoding of a normalized blob back into bytes and UTF-8 text.
//!
//! The decoder undoes [`crate::normalize`]: it strips every escape marker,
//! parses the remaining digits two at a time, and validates the bytes as
//! UTF-8. Each step is exposed separately so callers can stop early (for
//! example to inspect the raw bytes of a blob that is not valid text).

use tracing::debug;

use crate::error::ConvertError;
use crate::normalize::ESCAPE_MARKER;

/// Raw bytes and text recovered from a blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub bytes: Vec<u8>,
    pub text: String,
}

/// Remove every escape marker, leaving only the hex digits.
pub fn strip_markers(blob: &str) -> String {
    blob.replace(ESCAPE_MARKER, "")
}

/// Parse a pure hex-digit string into bytes, two characters per byte.
///
/// # Errors
/// [`ConvertError::MalformedHex`] on odd length or a non-hex character.
pub fn parse_bytes(hex_digits: &str) -> Result<Vec<u8>, ConvertError> {
    Ok(hex::decode(hex_digits)?)
}

/// Decode `bytes` as UTF-8.
///
/// # Errors
/// [`ConvertError::InvalidEncoding`] when the bytes are not valid UTF-8.
pub fn decode_text(bytes: &[u8]) -> Result<String, ConvertError> {
    Ok(std::str::from_utf8(bytes)?.to_owned())
}

/// Strip markers, parse bytes and decode text in one go.
pub fn decode(blob: &str) -> Result<Decoded, ConvertError> {
    let digits = strip_markers(blob);
    let bytes = parse_bytes(&digits)?;
    debug!(count = bytes.len(), "parsed raw bytes");
    let text = decode_text(&bytes)?;
    Ok(Decoded { bytes, text })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markers() {
        assert_eq!(strip_markers("\\x48\\x65"), "4865");
        assert_eq!(strip_markers(""), "");
    }

    #[test]
    fn test_parse_bytes_mixed_case() {
        assert_eq!(parse_bytes("4a4A").unwrap(), vec![0x4a, 0x4a]);
    }

    #[test]
    fn test_parse_bytes_odd_length() {
        let err = parse_bytes("486").unwrap_err();
        assert!(matches!(
            err,
            ConvertError::MalformedHex(hex::FromHexError::OddLength)
        ));
    }

    #[test]
    fn test_parse_bytes_bad_digit() {
        let err = parse_bytes("04060g").unwrap_err();
        assert!(matches!(
            err,
            ConvertError::MalformedHex(hex::FromHexError::InvalidHexCharacter { c: 'g', .. })
        ));
    }

    #[test]
    fn test_decode_hello() {
        let d = decode("\\x48\\x65\\x6c\\x6c\\x6f").unwrap();
        assert_eq!(d.text, "Hello");
        assert_eq!(d.bytes, b"Hello".to_vec());
    }

    #[test]
    fn test_decode_control_char() {
        let d = decode("\\x0f").unwrap();
        assert_eq!(d.text, "\u{0f}");
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let err = decode("\\xff").unwrap_err();
        assert!(matches!(err, ConvertError::InvalidEncoding(_)));
    }

    #[test]
    fn test_decode_multibyte() {
        let d = decode("\\xc3\\xa9").unwrap();
        assert_eq!(d.text, "é");
    }

    #[test]
    fn test_decode_empty() {
        let d = decode("").unwrap();
        assert!(d.bytes.is_empty());
        assert_eq!(d.text, "");
    }
}
