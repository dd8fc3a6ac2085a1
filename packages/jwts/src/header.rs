//! The one header every token carries

use crate::codec;
use crate::error::JwtResult;
use crate::types::Header;
use once_cell::sync::Lazy;

/// Algorithm name written into every header
pub const ALGORITHM: &str = "HS256";

/// Token type written into every header
pub const TOKEN_TYPE: &str = "JWT";

/// Process-wide header, `{"alg":"HS256","typ":"JWT"}`.
pub static DEFAULT_HEADER: Lazy<Header> = Lazy::new(|| Header {
    alg: ALGORITHM.to_string(),
    typ: TOKEN_TYPE.to_string(),
});

static DEFAULT_HEADER_BASE64: Lazy<JwtResult<String>> =
    Lazy::new(|| codec::encode(&*DEFAULT_HEADER));

/// Encoded form of [`DEFAULT_HEADER`], computed once and shared read-only.
///
/// # Errors
/// Returns the encoding error from first initialization, if any.
pub fn default_header_base64() -> JwtResult<&'static str> {
    DEFAULT_HEADER_BASE64
        .as_ref()
        .map(String::as_str)
        .map_err(Clone::clone)
}
