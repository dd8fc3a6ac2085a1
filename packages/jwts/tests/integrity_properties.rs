//! Signature integrity properties over generated parameters and secrets
#![allow(clippy::expect_used, clippy::unwrap_used)]

use jwts::{CreateTokenParams, JwtError, create_token_at, validate_token};
use proptest::prelude::*;

const BASE64_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

fn params_strategy() -> impl Strategy<Value = CreateTokenParams> {
    (
        prop::collection::vec("[a-z]{1,8}", 0..4),
        "[a-zA-Z0-9 ]{0,16}",
        "\\PC{0,16}",
        0i64..1_000_000,
        prop::option::of(-1_000i64..1_000),
    )
        .prop_map(|(aud, iss, sub, lifetime, delay)| CreateTokenParams {
            aud,
            iss,
            sub,
            lifetime,
            delay,
        })
}

fn secret_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..96)
}

proptest! {
    #[test]
    fn issued_tokens_validate_under_their_secret(
        params in params_strategy(),
        secret in secret_strategy(),
        now in 0i64..4_000_000_000,
    ) {
        let token = create_token_at(&params, &secret, now).expect("token should be issued");
        prop_assert_eq!(validate_token(token.as_str(), &secret), Ok(true));
    }

    #[test]
    fn other_secrets_are_rejected(
        params in params_strategy(),
        secret_a in secret_strategy(),
        secret_b in secret_strategy(),
    ) {
        prop_assume!(secret_a != secret_b);
        let token = create_token_at(&params, &secret_a, 1_700_000_000).expect("token should be issued");
        prop_assert_eq!(validate_token(token.as_str(), &secret_b), Ok(false));
    }

    #[test]
    fn any_changed_character_breaks_the_signature(
        params in params_strategy(),
        secret in secret_strategy(),
        position in any::<prop::sample::Index>(),
        replacement in any::<prop::sample::Index>(),
    ) {
        let token = create_token_at(&params, &secret, 1_700_000_000).expect("token should be issued");
        let mut bytes = token.into_inner().into_bytes();
        let i = position.index(bytes.len());
        prop_assume!(bytes[i] != b'.');

        let new_byte = BASE64_ALPHABET[replacement.index(BASE64_ALPHABET.len())];
        prop_assume!(bytes[i] != new_byte);
        bytes[i] = new_byte;

        let tampered = String::from_utf8(bytes).expect("token stays ASCII");
        prop_assert_eq!(validate_token(&tampered, &secret), Ok(false));
    }

    #[test]
    fn extra_or_missing_segments_are_malformed(
        params in params_strategy(),
        secret in secret_strategy(),
        drop_last in any::<bool>(),
    ) {
        let token = create_token_at(&params, &secret, 1_700_000_000).expect("token should be issued");
        let (candidate, segments) = if drop_last {
            let cut = token.as_str().rfind('.').expect("token has separators");
            (token.as_str()[..cut].to_string(), 2)
        } else {
            (format!("{token}.AAAA"), 4)
        };
        prop_assert_eq!(
            validate_token(&candidate, &secret),
            Err(JwtError::MalformedToken { segments })
        );
    }
}
