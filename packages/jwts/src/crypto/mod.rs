//! Keyed MAC operations

pub mod hmac_sha256;
