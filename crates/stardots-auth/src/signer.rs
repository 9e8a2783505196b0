//! Per-request header signing
//!
//! Each call to the API gets a fresh header set: unix-seconds timestamp,
//! a nonce built from the millisecond clock plus a random suffix, and an
//! uppercase-hex MD5 digest of `"{timestamp}|{client_secret}|{nonce}"`.
//!
//! The nonce carries no collision guarantee beyond its randomness: two
//! requests inside the same millisecond that draw the same suffix produce
//! the same nonce. The server additionally rejects stale timestamps, so the
//! nonce is not the only replay guard; do not rely on it being unique.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use md5::{Digest, Md5};
use rand::Rng;

use crate::{Credentials, SdkMetadata};

/// Unix-seconds request timestamp
pub const HEADER_TIMESTAMP: &str = "x-stardots-timestamp";
/// Per-request nonce
pub const HEADER_NONCE: &str = "x-stardots-nonce";
/// Public client key
pub const HEADER_KEY: &str = "x-stardots-key";
/// Uppercase-hex MD5 request signature
pub const HEADER_SIGN: &str = "x-stardots-sign";
/// SDK identification metadata, JSON-encoded
pub const HEADER_EXTRA: &str = "x-stardots-extra";

// Nonce suffix range: 10000 + random[0, 10000), always five digits.
const NONCE_SUFFIX_BASE: u32 = 10_000;
const NONCE_SUFFIX_SPAN: u32 = 10_000;

/// The five authentication headers attached to every API call.
///
/// Built fresh per request, never cached or reused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedHeaders {
    /// Unix time in whole seconds, decimal string
    pub timestamp: String,
    /// Millisecond clock concatenated with a random five-digit suffix
    pub nonce: String,
    /// The caller's public client key
    pub key: String,
    /// Uppercase hex MD5 digest, 32 characters
    pub sign: String,
    /// JSON-encoded [`SdkMetadata`]
    pub extra: String,
}

impl SignedHeaders {
    /// The header set as `(name, value)` pairs, wire-exact names.
    pub fn header_pairs(&self) -> [(&'static str, &str); 5] {
        [
            (HEADER_TIMESTAMP, self.timestamp.as_str()),
            (HEADER_NONCE, self.nonce.as_str()),
            (HEADER_KEY, self.key.as_str()),
            (HEADER_SIGN, self.sign.as_str()),
            (HEADER_EXTRA, self.extra.as_str()),
        ]
    }
}

/// Sign a request using the ambient wall clock and a fresh random suffix.
pub fn sign(credentials: &Credentials) -> SignedHeaders {
    let suffix = NONCE_SUFFIX_BASE + rand::thread_rng().gen_range(0..NONCE_SUFFIX_SPAN);
    sign_at(credentials, SystemTime::now(), suffix)
}

/// Deterministic signing core: same `(credentials, now, suffix)` always
/// yields the same header set. [`sign`] supplies the ambient inputs.
pub fn sign_at(credentials: &Credentials, now: SystemTime, suffix: u32) -> SignedHeaders {
    let unix = now.duration_since(UNIX_EPOCH).unwrap_or(Duration::ZERO);
    let timestamp = unix.as_secs().to_string();
    let nonce = format!("{}{}", unix.as_millis(), suffix);
    let sign = signature_digest(&timestamp, &credentials.client_secret, &nonce);

    SignedHeaders {
        timestamp,
        nonce,
        key: credentials.client_key.clone(),
        sign,
        extra: SdkMetadata::current().to_json(),
    }
}

/// Uppercase-hex MD5 of the pipe-delimited pre-image
/// `"{timestamp}|{secret}|{nonce}"`.
pub fn signature_digest(timestamp: &str, secret: &str, nonce: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(format!("{}|{}|{}", timestamp, secret, nonce).as_bytes());
    hex::encode_upper(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_credentials() -> Credentials {
        Credentials::new("test-key", "test-secret")
    }

    fn clock(secs: u64, millis: u32) -> SystemTime {
        UNIX_EPOCH + Duration::from_millis(secs * 1_000 + u64::from(millis))
    }

    #[test]
    fn test_signature_digest_known_answer() {
        assert_eq!(
            signature_digest("1714896000", "secret", "nonce"),
            "1C03F86AFC2B94958C945BE4C9BA4461"
        );
    }

    #[test]
    fn test_sign_at_known_answer() {
        let headers = sign_at(&test_credentials(), clock(1_714_896_000, 123), 10_482);

        assert_eq!(headers.timestamp, "1714896000");
        assert_eq!(headers.nonce, "171489600012310482");
        assert_eq!(headers.key, "test-key");
        assert_eq!(headers.sign, "911E1F4FC89120AD6E7442FB7AD4EB31");
    }

    #[test]
    fn test_sign_at_second_vector() {
        let creds = Credentials::new("k", "my-secret");
        let headers = sign_at(&creds, clock(1_700_000_000, 0), 12_345);

        assert_eq!(headers.nonce, "170000000000012345");
        assert_eq!(headers.sign, "91EF686DDC2141D1AACFE6AFCADD91FE");
    }

    #[test]
    fn test_sign_at_idempotent() {
        let creds = test_credentials();
        let now = clock(1_714_896_000, 999);
        assert_eq!(sign_at(&creds, now, 15_000), sign_at(&creds, now, 15_000));
    }

    #[test]
    fn test_digest_shape() {
        let headers = sign(&test_credentials());
        assert_eq!(headers.sign.len(), 32);
        assert!(headers
            .sign
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_nonce_format() {
        let headers = sign(&test_credentials());

        // 13-digit millisecond prefix for current epochs, 5-digit suffix
        assert_eq!(headers.nonce.len(), 18);
        assert!(headers.nonce.chars().all(|c| c.is_ascii_digit()));

        let suffix: u32 = headers.nonce[13..].parse().unwrap();
        assert!((10_000..=19_999).contains(&suffix));
    }

    #[test]
    fn test_sign_verifies_under_formula() {
        let creds = test_credentials();
        let a = sign(&creds);
        let b = sign(&creds);

        for headers in [&a, &b] {
            assert_eq!(
                headers.sign,
                signature_digest(&headers.timestamp, &creds.client_secret, &headers.nonce)
            );
        }
    }

    #[test]
    fn test_extra_is_current_metadata() {
        let headers = sign(&test_credentials());
        let parsed: SdkMetadata = serde_json::from_str(&headers.extra).unwrap();
        assert_eq!(parsed, SdkMetadata::current());
    }
}
