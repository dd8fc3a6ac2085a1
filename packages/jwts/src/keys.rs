//! Shared-secret generation and handling

use crate::error::{JwtError, JwtResult};
use rand::{TryRngCore, rngs::OsRng};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// Length of secrets produced for [`crate::create_token_with_generated_secret`]
pub const DEFAULT_SECRET_LEN: usize = 128;

/// HMAC key material, wiped from memory on drop.
///
/// Equality runs in constant time for keys of equal length.
#[derive(Clone)]
pub struct Secret(Zeroizing<Vec<u8>>);

impl Secret {
    /// Borrow the key bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Key length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the key is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq for Secret {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes().ct_eq(other.as_bytes()).into()
    }
}

impl Eq for Secret {}

impl From<Vec<u8>> for Secret {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Zeroizing::new(bytes))
    }
}

impl From<&[u8]> for Secret {
    fn from(bytes: &[u8]) -> Self {
        Self::from(bytes.to_vec())
    }
}

impl AsRef<[u8]> for Secret {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secret([REDACTED; {}])", self.0.len())
    }
}

/// Fill a new secret of `len` bytes from the operating system's CSPRNG.
///
/// # Errors
/// Returns [`JwtError::InvalidParams`] for `len == 0` and
/// [`JwtError::Entropy`] if the OS random source fails.
pub fn generate_secret(len: usize) -> JwtResult<Secret> {
    if len == 0 {
        return Err(JwtError::invalid_params("secret length must be positive"));
    }

    let mut bytes = Zeroizing::new(vec![0u8; len]);
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| JwtError::Entropy(e.to_string()))?;
    Ok(Secret(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_secrets_have_requested_length_and_differ() {
        let a = generate_secret(DEFAULT_SECRET_LEN);
        let b = generate_secret(DEFAULT_SECRET_LEN);
        assert_eq!(a.as_ref().map(Secret::len), Ok(DEFAULT_SECRET_LEN));
        assert_ne!(a, b);
    }

    #[test]
    fn equality_compares_key_bytes() {
        let a = Secret::from(b"same key".as_slice());
        assert_eq!(a, Secret::from(b"same key".to_vec()));
        assert_ne!(a, Secret::from(b"same kez".as_slice()));
        assert_ne!(a, Secret::from(b"same ke".as_slice()));
    }

    #[test]
    fn zero_length_is_rejected() {
        assert!(matches!(generate_secret(0), Err(JwtError::InvalidParams(_))));
    }

    #[test]
    fn debug_output_hides_bytes() {
        let secret = Secret::from(b"hunter2".as_slice());
        assert_eq!(format!("{secret:?}"), "Secret([REDACTED; 7])");
    }
}
