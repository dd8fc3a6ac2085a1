//! Joining and splitting the three token segments

use crate::codec;
use crate::error::{JwtError, JwtResult};
use crate::types::{Claims, Header, Token, TokenChunks, TokenDetails};

const SEPARATOR: char = '.';

/// Join encoded header, claims and signature with `.`.
#[must_use]
pub fn assemble(header: &str, claims: &str, signature: &str) -> Token {
    Token::from(format!("{header}{SEPARATOR}{claims}{SEPARATOR}{signature}"))
}

/// Split a token into its three encoded segments.
///
/// # Errors
/// Returns [`JwtError::MissingToken`] for an empty token and
/// [`JwtError::MalformedToken`] unless there are exactly three segments.
pub fn parse(token: &str) -> JwtResult<TokenChunks<'_>> {
    if token.is_empty() {
        return Err(JwtError::MissingToken);
    }

    let mut parts = token.split(SEPARATOR);
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(header), Some(claims), Some(signature), None) => Ok(TokenChunks {
            header,
            claims,
            signature,
        }),
        _ => Err(JwtError::MalformedToken {
            segments: token.split(SEPARATOR).count(),
        }),
    }
}

/// Decode the header and claims of already split chunks.
///
/// The signature segment is not looked at.
///
/// # Errors
/// Returns [`JwtError::Decoding`] when either segment is not base64 JSON of
/// the expected shape.
pub fn parse_details(chunks: &TokenChunks<'_>) -> JwtResult<TokenDetails> {
    let header: Header = codec::decode_json(chunks.header)?;
    let claims: Claims = codec::decode_json(chunks.claims)?;
    Ok(TokenDetails { header, claims })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assemble_then_parse_yields_segments() {
        let token = assemble("aGVhZGVy", "Y2xhaW1z", "c2ln");
        assert_eq!(token.as_str(), "aGVhZGVy.Y2xhaW1z.c2ln");

        let chunks = parse(token.as_str());
        assert_eq!(
            chunks,
            Ok(TokenChunks {
                header: "aGVhZGVy",
                claims: "Y2xhaW1z",
                signature: "c2ln",
            })
        );
    }

    #[test]
    fn wrong_segment_counts_are_malformed() {
        assert_eq!(parse("a.b"), Err(JwtError::MalformedToken { segments: 2 }));
        assert_eq!(parse("a.b.c.d"), Err(JwtError::MalformedToken { segments: 4 }));
        assert_eq!(parse("abc"), Err(JwtError::MalformedToken { segments: 1 }));
    }

    #[test]
    fn empty_token_is_missing() {
        assert_eq!(parse(""), Err(JwtError::MissingToken));
    }

    #[test]
    fn empty_segments_still_count() {
        let chunks = parse("..");
        assert_eq!(chunks.map(|c| c.signature), Ok(""));
    }

    #[test]
    fn undecodable_claims_fail_details() {
        let chunks = TokenChunks {
            header: "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9",
            claims: "not base64!",
            signature: "",
        };
        assert!(matches!(parse_details(&chunks), Err(JwtError::Decoding(_))));
    }
}
