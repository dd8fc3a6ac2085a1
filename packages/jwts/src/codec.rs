//! Canonical JSON to unpadded base64 and back
//!
//! Segments use the standard base64 alphabet without `=` padding. JSON
//! output is deterministic: serde emits struct fields in declaration
//! order, and optional fields are skipped rather than written as `null`.

use crate::error::{JwtError, JwtResult};
use base64::{Engine as _, engine::general_purpose::STANDARD_NO_PAD};
use serde::{Serialize, de::DeserializeOwned};

/// Serialize `value` to JSON and base64-encode the bytes.
///
/// # Errors
/// Returns [`JwtError::Encoding`] if serialization fails or the value
/// serializes to `null`.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> JwtResult<String> {
    let json = serde_json::to_vec(value).map_err(|e| JwtError::encoding(&e.to_string()))?;
    if json == b"null" {
        return Err(JwtError::encoding("source is absent"));
    }
    Ok(encode_bytes(&json))
}

/// Base64-encode raw bytes
#[inline]
#[must_use]
pub fn encode_bytes(bytes: &[u8]) -> String {
    STANDARD_NO_PAD.encode(bytes)
}

/// Base64-decode a segment into raw bytes.
///
/// # Errors
/// Returns [`JwtError::Decoding`] if `text` is empty or not valid unpadded base64.
pub fn decode_bytes(text: &str) -> JwtResult<Vec<u8>> {
    if text.is_empty() {
        return Err(JwtError::decoding("source is absent"));
    }
    STANDARD_NO_PAD
        .decode(text)
        .map_err(|e| JwtError::decoding(&e.to_string()))
}

/// Base64-decode a segment into UTF-8 text.
///
/// # Errors
/// Returns [`JwtError::Decoding`] on bad base64 or non-UTF-8 content.
pub fn decode(text: &str) -> JwtResult<String> {
    let bytes = decode_bytes(text)?;
    String::from_utf8(bytes).map_err(|e| JwtError::decoding(&e.to_string()))
}

/// Base64-decode a segment and parse the JSON inside.
///
/// # Errors
/// Returns [`JwtError::Decoding`] on bad base64 or JSON that does not fit `T`.
pub fn decode_json<T: DeserializeOwned>(text: &str) -> JwtResult<T> {
    let bytes = decode_bytes(text)?;
    serde_json::from_slice(&bytes).map_err(|e| JwtError::decoding(&e.to_string()))
}
