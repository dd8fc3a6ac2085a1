//! Token type definitions

use serde::{Deserialize, Deserializer, Serialize};

/// Token header
///
/// Missing fields decode as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Signing algorithm
    #[serde(default)]
    pub alg: String,
    /// Token type
    #[serde(default)]
    pub typ: String,
}

/// Signed payload describing who a token is for and when it is valid.
///
/// Field order is the wire order: `aud, exp, iat, iss, nbf, sub`. The
/// signature covers these exact bytes, so reordering fields breaks
/// verification by other implementations.
///
/// Decoding is lenient: a missing or `null` `aud` is an empty audience and
/// missing `exp`/`iat` are `0`, so such tokens fail policy checks with a
/// specific error instead of failing to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Audience
    #[serde(default, deserialize_with = "null_as_empty")]
    pub aud: Vec<String>,
    /// Expiry (unix seconds)
    #[serde(default)]
    pub exp: i64,
    /// Issued-at (unix seconds)
    #[serde(default)]
    pub iat: i64,
    /// Issuer
    #[serde(default)]
    pub iss: String,
    /// Not before (unix seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    /// Subject
    #[serde(default)]
    pub sub: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Claims {
    /// Whether `target` is one of the token's audiences.
    #[must_use]
    pub fn has_audience(&self, target: &str) -> bool {
        self.aud.iter().any(|aud| aud == target)
    }
}

/// Caller input for issuing a token.
///
/// `lifetime` and `delay` are relative seconds; they become absolute `exp`
/// and `nbf` when the claims are built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTokenParams {
    /// Intended recipients
    pub aud: Vec<String>,
    /// Issuer
    pub iss: String,
    /// Subject
    pub sub: String,
    /// Seconds until expiry, counted from issuance
    pub lifetime: i64,
    /// Seconds until the token becomes usable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<i64>,
}

impl CreateTokenParams {
    /// Start parameters for `sub` with no audience, no issuer and zero lifetime.
    pub fn new(sub: impl Into<String>) -> Self {
        Self {
            sub: sub.into(),
            ..Self::default()
        }
    }

    /// Add one audience entry
    #[must_use]
    pub fn audience(mut self, aud: impl Into<String>) -> Self {
        self.aud.push(aud.into());
        self
    }

    /// Set the issuer
    #[must_use]
    pub fn issuer(mut self, iss: impl Into<String>) -> Self {
        self.iss = iss.into();
        self
    }

    /// Set the lifetime in seconds
    #[must_use]
    pub fn lifetime(mut self, seconds: i64) -> Self {
        self.lifetime = seconds;
        self
    }

    /// Delay usability by `seconds`
    #[must_use]
    pub fn delay(mut self, seconds: i64) -> Self {
        self.delay = Some(seconds);
        self
    }
}

/// A token split into its three still-encoded segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenChunks<'a> {
    /// Encoded header
    pub header: &'a str,
    /// Encoded claims
    pub claims: &'a str,
    /// Encoded signature
    pub signature: &'a str,
}

/// Decoded header and claims of a token.
///
/// Nothing here has been integrity-checked. Run [`crate::validate_token`]
/// before acting on these values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDetails {
    /// Decoded header
    pub header: Header,
    /// Decoded claims
    pub claims: Claims,
}

/// Token string wrapper
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    /// Borrow the token text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the token text
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for Token {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
