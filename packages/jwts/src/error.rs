//! Token error types

use thiserror::Error;

/// Token operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// Every way issuing, parsing or verifying a token can fail.
///
/// Signature mismatch is deliberately absent from the integrity check:
/// [`crate::validate_token`] reports it as `Ok(false)`. Only the combined
/// acceptance pipeline surfaces it as [`JwtError::InvalidSignature`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// A required input was empty
    #[error("missing input: {0}")]
    MissingInput(&'static str),
    /// No secret was supplied for signing or verification
    #[error("secret is missing")]
    MissingKey,
    /// No token was supplied
    #[error("token is missing")]
    MissingToken,
    /// Caller-supplied creation parameters were rejected
    #[error("invalid token parameters: {0}")]
    InvalidParams(String),
    /// A value could not be serialized
    #[error("encoding failed: {0}")]
    Encoding(String),
    /// A segment was not valid base64 or not the expected JSON
    #[error("decoding failed: {0}")]
    Decoding(String),
    /// The token did not split into exactly three segments
    #[error("malformed token: expected 3 segments, found {segments}")]
    MalformedToken {
        /// Number of `.`-separated segments actually found
        segments: usize,
    },
    /// The requested audience is not listed in `aud`
    #[error("audience '{0}' not found in token")]
    AudienceNotFound(String),
    /// `iat` lies in the future
    #[error("token issued in the future (iat {iat}, now {now})")]
    IssuedInFuture {
        /// Issued-at claim
        iat: i64,
        /// Verification instant
        now: i64,
    },
    /// `nbf` has not passed yet
    #[error("token used before expected time (nbf {nbf}, now {now})")]
    UsedBeforeExpected {
        /// Not-before claim
        nbf: i64,
        /// Verification instant
        now: i64,
    },
    /// `exp` has been reached
    #[error("token is expired (exp {exp}, now {now})")]
    Expired {
        /// Expiry claim
        exp: i64,
        /// Verification instant
        now: i64,
    },
    /// Recomputed signature differs from the token's signature
    #[error("token signature mismatch")]
    InvalidSignature,
    /// The random source could not produce key material
    #[error("entropy source failed: {0}")]
    Entropy(String),
}

impl JwtError {
    /// Create an invalid params error
    #[inline]
    #[must_use]
    pub fn invalid_params(msg: &str) -> Self {
        JwtError::InvalidParams(msg.to_string())
    }

    /// Create an encoding error
    #[inline]
    #[must_use]
    pub fn encoding(msg: &str) -> Self {
        JwtError::Encoding(msg.to_string())
    }

    /// Create a decoding error
    #[inline]
    #[must_use]
    pub fn decoding(msg: &str) -> Self {
        JwtError::Decoding(msg.to_string())
    }

    /// True for failures of the time window or audience policy.
    #[must_use]
    pub fn is_policy_failure(&self) -> bool {
        matches!(
            self,
            JwtError::AudienceNotFound(_)
                | JwtError::IssuedInFuture { .. }
                | JwtError::UsedBeforeExpected { .. }
                | JwtError::Expired { .. }
        )
    }
}
