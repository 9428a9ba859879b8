//! Base64URL transcoding per RFC 4648 §5
//!
//! Thin wrapper around the `base64` crate's unpadded URL-safe engine that
//! maps failures onto the crate error type. Padding (`=`) is rejected, as
//! the compact serialization strips it.

use crate::error::{Error, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// Encode bytes as unpadded base64url
pub fn encode_bytes(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Encode a string as unpadded base64url
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Decode an unpadded base64url string to bytes
pub fn decode_bytes(input: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|e| Error::InvalidEncoding(format!("base64url decode failed: {e}")))
}

/// Decode an unpadded base64url string to a UTF-8 string
pub fn decode(input: &str) -> Result<String> {
    decode_bytes(input).and_then(|bytes| {
        String::from_utf8(bytes).map_err(|e| Error::InvalidEncoding(format!("invalid UTF-8: {e}")))
    })
}
