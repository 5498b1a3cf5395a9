//! Base64 helpers shared by the compact and legacy tokens.

use base64::engine::general_purpose::{STANDARD, URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;
use wg_core::Result;

/// URL-safe alphabet, `=` padding stripped.
pub fn encode_unpadded(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Standard alphabet with padding, as written by the legacy link builder.
pub fn encode_standard(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode either alphabet, padded or not.
///
/// A space is read back as `+`: form decoding turns an unescaped `+` into one.
/// Callers trim surrounding whitespace first.
pub fn decode_lenient(token: &str) -> Result<Vec<u8>> {
    let mut normalized = token.trim_matches(['\r', '\n']).replace(' ', "+");
    let unpadded_len = normalized.trim_end_matches('=').len();
    normalized.truncate(unpadded_len);
    while normalized.len() % 4 != 0 {
        normalized.push('=');
    }
    let bytes = if normalized.contains(['+', '/']) {
        STANDARD.decode(normalized.as_bytes())?
    } else {
        URL_SAFE.decode(normalized.as_bytes())?
    };
    Ok(bytes)
}
