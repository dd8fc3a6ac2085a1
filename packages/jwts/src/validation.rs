//! Time window and audience policy
//!
//! Checks run in a fixed order and stop at the first failure:
//! audience, issued-in-future, not-before, expiry. None of them look at the
//! signature; callers must establish integrity separately.

use crate::claims::now_seconds;
use crate::error::{JwtError, JwtResult};
use crate::types::{Claims, TokenDetails};

/// Check `details` against `audience` at the current instant.
///
/// # Errors
/// See [`verify_window_and_audience_at`].
pub fn verify_window_and_audience(details: &TokenDetails, audience: &str) -> JwtResult<()> {
    verify_window_and_audience_at(details, audience, now_seconds())
}

/// Check `details` against `audience` at `now` (unix seconds).
///
/// # Errors
/// - [`JwtError::AudienceNotFound`] if `audience` is not in `aud`
/// - [`JwtError::IssuedInFuture`] if `iat > now`
/// - [`JwtError::UsedBeforeExpected`] if `nbf` is present and `nbf >= now`
/// - [`JwtError::Expired`] unless `exp > now`
pub fn verify_window_and_audience_at(
    details: &TokenDetails,
    audience: &str,
    now: i64,
) -> JwtResult<()> {
    let claims = &details.claims;
    check_audience(claims, audience)?;
    check_window(claims, now)
}

fn check_audience(claims: &Claims, audience: &str) -> JwtResult<()> {
    if claims.has_audience(audience) {
        Ok(())
    } else {
        Err(JwtError::AudienceNotFound(audience.to_string()))
    }
}

fn check_window(claims: &Claims, now: i64) -> JwtResult<()> {
    if claims.iat > now {
        return Err(JwtError::IssuedInFuture {
            iat: claims.iat,
            now,
        });
    }

    if let Some(nbf) = claims.nbf.filter(|nbf| *nbf >= now) {
        return Err(JwtError::UsedBeforeExpected { nbf, now });
    }

    if claims.exp > now {
        Ok(())
    } else {
        Err(JwtError::Expired {
            exp: claims.exp,
            now,
        })
    }
}
