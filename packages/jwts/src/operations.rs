//! Public token operations
//!
//! Issuing runs claims → codec → signer → assembler. Consuming runs
//! parser → codec → verifier. Integrity ([`validate_token`]) and policy
//! ([`verify_token`]) are independent; [`accept_token`] runs both in order.

use crate::claims::{encode_claims_at, now_seconds};
use crate::crypto::hmac_sha256::{sign, verify_signature};
use crate::error::{JwtError, JwtResult};
use crate::header::default_header_base64;
use crate::keys::{DEFAULT_SECRET_LEN, Secret, generate_secret};
use crate::token::{assemble, parse, parse_details};
use crate::types::{CreateTokenParams, Token, TokenDetails};
use crate::validation::verify_window_and_audience_at;
use tracing::{debug, trace};

/// A token together with the secret it was signed with.
#[derive(Debug, Clone)]
pub struct TokenPayload {
    /// The issued token
    pub token: Token,
    /// Key the token was signed with
    pub secret: Secret,
    /// Encoded signature segment of `token`
    pub signature: String,
}

/// Issue a token for `params`, signed with `secret`.
///
/// # Errors
/// See [`create_token_at`].
pub fn create_token(params: &CreateTokenParams, secret: &[u8]) -> JwtResult<Token> {
    create_token_at(params, secret, now_seconds())
}

/// Issue a token for `params` as of `now` (unix seconds).
///
/// # Errors
/// Returns [`JwtError::MissingKey`] for an empty secret,
/// [`JwtError::InvalidParams`] for rejected parameters and
/// [`JwtError::Encoding`] if the claims cannot be serialized.
pub fn create_token_at(params: &CreateTokenParams, secret: &[u8], now: i64) -> JwtResult<Token> {
    issue(params, secret, now).map(|(token, _)| token)
}

fn issue(params: &CreateTokenParams, secret: &[u8], now: i64) -> JwtResult<(Token, String)> {
    if secret.is_empty() {
        return Err(JwtError::MissingKey);
    }

    let header = default_header_base64()?;
    let claims = encode_claims_at(params, now)?;
    let signature = sign(header, &claims, secret)?;
    let token = assemble(header, &claims, &signature);

    debug!(sub = %params.sub, audiences = params.aud.len(), iat = now, "issued token");
    Ok((token, signature))
}

/// Issue a token under a freshly generated secret of
/// [`DEFAULT_SECRET_LEN`] bytes and hand back both.
///
/// # Errors
/// Returns [`JwtError::Entropy`] if no secret could be generated, otherwise
/// the errors of [`create_token`].
pub fn create_token_with_generated_secret(params: &CreateTokenParams) -> JwtResult<TokenPayload> {
    let secret = generate_secret(DEFAULT_SECRET_LEN)?;
    let (token, signature) = issue(params, secret.as_bytes(), now_seconds())?;
    Ok(TokenPayload {
        token,
        secret,
        signature,
    })
}

/// Decode a token's header and claims without validating anything.
///
/// The result must not be trusted until [`validate_token`] succeeds.
///
/// # Errors
/// Returns [`JwtError::MissingToken`], [`JwtError::MalformedToken`] or
/// [`JwtError::Decoding`].
pub fn parse_token_details(token: &str) -> JwtResult<TokenDetails> {
    let chunks = parse(token)?;
    parse_details(&chunks)
}

/// Check a token's time window and audience at the current instant.
///
/// Integrity is not checked. Returns `Ok(true)` when every policy check
/// passes; each failing check is reported as its own error.
///
/// # Errors
/// See [`verify_token_at`].
pub fn verify_token(token: &str, audience: &str) -> JwtResult<bool> {
    verify_token_at(token, audience, now_seconds())
}

/// Check a token's time window and audience at `now` (unix seconds).
///
/// # Errors
/// Parsing errors as for [`parse_token_details`], then
/// [`JwtError::AudienceNotFound`], [`JwtError::IssuedInFuture`],
/// [`JwtError::UsedBeforeExpected`] or [`JwtError::Expired`], in that order.
pub fn verify_token_at(token: &str, audience: &str, now: i64) -> JwtResult<bool> {
    let details = parse_token_details(token)?;
    verify_window_and_audience_at(&details, audience, now)?;
    Ok(true)
}

/// Check a token's signature against `secret`, ignoring its claims.
///
/// A wrong signature is `Ok(false)`.
///
/// # Errors
/// Returns [`JwtError::MissingToken`] or [`JwtError::MalformedToken`] for
/// unparsable tokens and [`JwtError::MissingKey`] for an empty secret.
pub fn validate_token(token: &str, secret: &[u8]) -> JwtResult<bool> {
    let chunks = parse(token)?;
    let valid = verify_signature(&chunks, secret)?;
    trace!(valid, "checked token signature");
    Ok(valid)
}

/// Check a [`TokenPayload`]'s token against its own secret.
///
/// # Errors
/// Same as [`validate_token`].
pub fn validate_payload(payload: &TokenPayload) -> JwtResult<bool> {
    validate_token(payload.token.as_str(), payload.secret.as_bytes())
}

/// Run the full acceptance pipeline at the current instant.
///
/// # Errors
/// See [`accept_token_at`].
pub fn accept_token(token: &str, secret: &[u8], audience: &str) -> JwtResult<TokenDetails> {
    accept_token_at(token, secret, audience, now_seconds())
}

/// Parse, decode, verify the signature, then apply policy at `now`.
///
/// Stops at the first failing stage. Unlike [`validate_token`], a signature
/// mismatch here is [`JwtError::InvalidSignature`], so decoded claims are
/// only ever returned from an authentic token.
///
/// # Errors
/// The first failure among parsing, decoding, signature and policy checks.
pub fn accept_token_at(
    token: &str,
    secret: &[u8],
    audience: &str,
    now: i64,
) -> JwtResult<TokenDetails> {
    let chunks = parse(token)?;
    let details = parse_details(&chunks)?;

    if !verify_signature(&chunks, secret)? {
        return Err(JwtError::InvalidSignature);
    }

    verify_window_and_audience_at(&details, audience, now)?;
    debug!(sub = %details.claims.sub, audience, "accepted token");
    Ok(details)
}
