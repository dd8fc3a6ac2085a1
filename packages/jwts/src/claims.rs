//! Claims derived from creation parameters and the clock

use crate::codec;
use crate::error::{JwtError, JwtResult};
use crate::types::{Claims, CreateTokenParams};
use chrono::Utc;

/// Current time as unix seconds
#[inline]
pub(crate) fn now_seconds() -> i64 {
    Utc::now().timestamp()
}

/// Build claims for `params` issued at the current instant.
///
/// # Errors
/// See [`build_claims_at`].
pub fn build_claims(params: &CreateTokenParams) -> JwtResult<Claims> {
    build_claims_at(params, now_seconds())
}

/// Build claims for `params` issued at `now` (unix seconds).
///
/// `exp` is `now + lifetime`. `nbf` is `now + delay` when a delay is given
/// and `0` otherwise, matching tokens that always carry an `nbf` field; a
/// zero `nbf` never blocks acceptance. An empty audience is written as
/// `"aud":[]`, never `null`.
///
/// # Errors
/// Returns [`JwtError::InvalidParams`] for a negative lifetime or when the
/// absolute timestamps overflow.
pub fn build_claims_at(params: &CreateTokenParams, now: i64) -> JwtResult<Claims> {
    if params.lifetime < 0 {
        return Err(JwtError::InvalidParams(format!(
            "lifetime must not be negative, got {}",
            params.lifetime
        )));
    }

    let exp = now
        .checked_add(params.lifetime)
        .ok_or_else(|| JwtError::invalid_params("lifetime overflows expiry"))?;

    let nbf = match params.delay {
        Some(delay) => now
            .checked_add(delay)
            .ok_or_else(|| JwtError::invalid_params("delay overflows not-before"))?,
        None => 0,
    };

    Ok(Claims {
        aud: params.aud.clone(),
        exp,
        iat: now,
        iss: params.iss.clone(),
        nbf: Some(nbf),
        sub: params.sub.clone(),
    })
}

/// Build and encode claims in one step.
///
/// # Errors
/// Propagates [`build_claims_at`] and [`codec::encode`] failures.
pub fn encode_claims_at(params: &CreateTokenParams, now: i64) -> JwtResult<String> {
    let claims = build_claims_at(params, now)?;
    codec::encode(&claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> CreateTokenParams {
        CreateTokenParams::new("y")
            .audience("svc")
            .issuer("x")
            .lifetime(3600)
    }

    #[test]
    fn expiry_is_relative_to_issuance() {
        let claims = build_claims_at(&params(), 1_700_000_000);
        let claims = claims.unwrap_or_else(|e| panic!("claims should build: {e}"));
        assert_eq!(claims.iat, 1_700_000_000);
        assert_eq!(claims.exp, 1_700_003_600);
        assert_eq!(claims.nbf, Some(0));
    }

    #[test]
    fn delay_sets_not_before() {
        let claims = build_claims_at(&params().delay(60), 1_700_000_000);
        assert_eq!(claims.map(|c| c.nbf), Ok(Some(1_700_000_060)));
    }

    #[test]
    fn negative_lifetime_is_rejected() {
        let result = build_claims_at(&params().lifetime(-1), 1_700_000_000);
        assert!(matches!(result, Err(JwtError::InvalidParams(_))));
    }

    #[test]
    fn zero_lifetime_expires_at_issuance() {
        let claims = build_claims_at(&params().lifetime(0), 1_700_000_000);
        assert_eq!(claims.map(|c| c.exp), Ok(1_700_000_000));
    }

    #[test]
    fn overflowing_lifetime_is_rejected() {
        let result = build_claims_at(&params().lifetime(i64::MAX), 1);
        assert!(matches!(result, Err(JwtError::InvalidParams(_))));
    }

    #[test]
    fn encoded_claims_follow_wire_field_order() {
        let encoded = encode_claims_at(&params(), 1_700_000_000);
        assert_eq!(
            encoded.as_deref(),
            Ok("eyJhdWQiOlsic3ZjIl0sImV4cCI6MTcwMDAwMzYwMCwiaWF0IjoxNzAwMDAwMDAwLCJpc3MiOiJ4IiwibmJmIjowLCJzdWIiOiJ5In0")
        );
    }

    #[test]
    fn empty_audience_is_written_as_list() {
        let encoded = encode_claims_at(&CreateTokenParams::new("y"), 0)
            .and_then(|text| codec::decode(&text));
        assert_eq!(
            encoded.as_deref(),
            Ok(r#"{"aud":[],"exp":0,"iat":0,"iss":"","nbf":0,"sub":"y"}"#)
        );
    }
}
