//! HMAC-SHA256 signing and verification over encoded token segments

use crate::codec;
use crate::error::{JwtError, JwtResult};
use crate::types::TokenChunks;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Raw HMAC-SHA256 of `data` under `secret`
pub(crate) fn hmac_sha256(data: &[u8], secret: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|_| JwtError::invalid_params("invalid HMAC key"))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Sign `header.claims` and return the encoded signature segment.
///
/// Pure function of its inputs; verification re-runs the same computation.
///
/// # Errors
/// Returns [`JwtError::MissingKey`] for an empty secret and
/// [`JwtError::MissingInput`] for an empty segment.
pub fn sign(header: &str, claims: &str, secret: &[u8]) -> JwtResult<String> {
    if secret.is_empty() {
        return Err(JwtError::MissingKey);
    }
    if header.is_empty() {
        return Err(JwtError::MissingInput("header"));
    }
    if claims.is_empty() {
        return Err(JwtError::MissingInput("claims"));
    }

    let signing_input = format!("{header}.{claims}");
    let mac = hmac_sha256(signing_input.as_bytes(), secret)?;
    Ok(codec::encode_bytes(&mac))
}

/// Recompute the signature of `chunks` and compare it in constant time.
///
/// A mismatch is `Ok(false)`, not an error.
///
/// # Errors
/// Same as [`sign`].
pub fn verify_signature(chunks: &TokenChunks<'_>, secret: &[u8]) -> JwtResult<bool> {
    let expected = sign(chunks.header, chunks.claims, secret)?;
    Ok(expected
        .as_bytes()
        .ct_eq(chunks.signature.as_bytes())
        .into())
}
