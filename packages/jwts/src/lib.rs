//! Compact HS256 bearer tokens
//!
//! This crate issues and verifies JWT-shaped tokens:
//! - one fixed header, `{"alg":"HS256","typ":"JWT"}`
//! - claims `aud, exp, iat, iss, nbf, sub` with a bounded validity window
//! - HMAC-SHA256 signatures over `header.claims`
//! - unpadded standard-alphabet base64 segments
//!
//! Integrity and policy are separate checks. [`validate_token`] answers
//! "was this signed with my secret?", [`verify_token`] answers "is this
//! token meant for this audience right now?", and [`accept_token`] runs
//! both in order.
//!
//! ```
//! use jwts::{CreateTokenParams, create_token, validate_token, verify_token};
//!
//! let params = CreateTokenParams::new("user-1")
//!     .audience("svc")
//!     .issuer("auth")
//!     .lifetime(3600);
//! let token = create_token(&params, b"shared secret")?;
//!
//! assert!(validate_token(token.as_str(), b"shared secret")?);
//! assert!(verify_token(token.as_str(), "svc")?);
//! # Ok::<(), jwts::JwtError>(())
//! ```

pub mod claims;
pub mod codec;
pub mod crypto;
mod error;
pub mod header;
pub mod keys;
pub mod operations;
pub mod token;
mod types;
pub mod validation;

pub use error::*;
pub use header::{DEFAULT_HEADER, default_header_base64};
pub use keys::{DEFAULT_SECRET_LEN, Secret, generate_secret};
pub use operations::{
    TokenPayload, accept_token, accept_token_at, create_token, create_token_at,
    create_token_with_generated_secret, parse_token_details, validate_payload, validate_token,
    verify_token, verify_token_at,
};
pub use types::*;
