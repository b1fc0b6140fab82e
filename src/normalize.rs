//! Token normalization.
//!
//! Each command-line token is meant to spell one byte in hex. Tokens are
//! commonly pasted from debugger or array-literal output, so they may carry
//! trailing (or stray) commas and may drop the leading zero (`f` for `0f`).
//! Normalization cleans each token up and joins them into a single
//! `\x`-delimited blob such as `\x48\x65\x6c`.
//!
//! Nothing here validates hex content: bad digits pass straight through and
//! are rejected by [`crate::decode`].

use tracing::warn;

/// Two-character marker placed in front of every byte in the blob.
pub const ESCAPE_MARKER: &str = "\\x";

/// Normalize one token: drop commas, left-pad a single digit with `0`, and
/// prefix the escape marker.
///
/// Tokens that are empty or longer than two characters after comma removal
/// are passed through unpadded (a warning is logged).
pub fn normalize_token(token: &str) -> String {
    let digits: String = token.chars().filter(|&c| c != ',').collect();
    let len = digits.chars().count();

    let mut out = String::with_capacity(ESCAPE_MARKER.len() + digits.len().max(2));
    out.push_str(ESCAPE_MARKER);
    match len {
        1 => {
            out.push('0');
            out.push_str(&digits);
        }
        2 => out.push_str(&digits),
        _ => {
            warn!(token, len, "token is not 1-2 characters after comma removal; passing through");
            out.push_str(&digits);
        }
    }
    out
}

/// Normalize every token and concatenate the results in input order.
pub fn normalize<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens.iter().map(|t| normalize_token(t.as_ref())).collect()
}
