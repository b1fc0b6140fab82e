//! Error type shared by the normalizer, decoder and CLI runner.

use thiserror::Error;

/// Everything that can go wrong while converting hex tokens to text.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The hex digits left after stripping escape markers have odd length or
    /// contain a character outside `[0-9a-fA-F]`.
    #[error("malformed hex: {}", describe_hex_error(.0))]
    MalformedHex(#[from] hex::FromHexError),

    /// The byte sequence is not valid UTF-8.
    #[error("invalid UTF-8: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    #[error("usage: {0}")]
    Usage(String),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("clipboard: {0}")]
    Clipboard(#[from] arboard::Error),
}

/// Positions from `hex` index the marker-free digit string; report the
/// 1-based byte (token) instead.
fn describe_hex_error(err: &hex::FromHexError) -> String {
    match err {
        hex::FromHexError::OddLength => "odd number of hex digits".to_string(),
        hex::FromHexError::InvalidHexCharacter { c, index } => {
            format!("invalid character {:?} in byte {}", c, index / 2 + 1)
        }
        other => other.to_string(),
    }
}
