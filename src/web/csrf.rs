//! Stateless CSRF tokens for the login form.
//!
//! A token is `<nonce>.<issued>.<mac>`:
//!
//! - `nonce` - 16 random bytes, hex-encoded
//! - `issued` - Unix timestamp (seconds) when the token was created
//! - `mac` - hex-encoded HMAC-SHA256 of `<nonce>.<issued>` keyed by `SECRET_KEY`
//!
//! No session or cookie is involved. A token is accepted if its MAC verifies
//! and it is younger than the configured time limit.

use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{AppError, CsrfError};

type HmacSha256 = Hmac<Sha256>;

const NONCE_BYTES: usize = 16;

/// Issues and verifies CSRF tokens.
#[derive(Clone)]
pub struct CsrfProtection {
    key: Vec<u8>,
    time_limit_seconds: i64,
    enabled: bool,
}

impl std::fmt::Debug for CsrfProtection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsrfProtection")
            .field("time_limit_seconds", &self.time_limit_seconds)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl CsrfProtection {
    /// Creates a token issuer keyed by `secret_key`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if the key is empty or the time limit is zero.
    pub fn new(secret_key: &str, time_limit_seconds: u64) -> Result<Self, AppError> {
        if secret_key.is_empty() {
            return Err(AppError::config("SECRET_KEY must not be empty"));
        }
        if time_limit_seconds == 0 {
            return Err(AppError::config("CSRF_TIME_LIMIT must be greater than 0"));
        }

        Ok(Self {
            key: secret_key.as_bytes().to_vec(),
            time_limit_seconds: i64::try_from(time_limit_seconds).unwrap_or(i64::MAX),
            enabled: true,
        })
    }

    /// Turns verification off. Tokens are still issued.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Issues a fresh token stamped with the current time.
    pub fn generate(&self) -> String {
        self.generate_at(Utc::now().timestamp())
    }

    fn generate_at(&self, issued: i64) -> String {
        let nonce: [u8; NONCE_BYTES] = rand::random();
        let payload = format!("{}.{}", hex::encode(nonce), issued);
        let mac = hex::encode(self.mac(&payload).finalize().into_bytes());
        format!("{payload}.{mac}")
    }

    /// Verifies a submitted token against the current time.
    ///
    /// Always succeeds when protection is disabled.
    ///
    /// # Errors
    ///
    /// - [`CsrfError::Missing`] if the token is empty
    /// - [`CsrfError::Invalid`] if it is malformed or its MAC does not verify
    /// - [`CsrfError::Expired`] if it is older than the time limit
    pub fn verify(&self, token: &str) -> Result<(), CsrfError> {
        if !self.enabled {
            return Ok(());
        }
        self.verify_at(token, Utc::now().timestamp())
    }

    fn verify_at(&self, token: &str, now: i64) -> Result<(), CsrfError> {
        if token.is_empty() {
            return Err(CsrfError::Missing);
        }

        let (payload, mac_hex) = token.rsplit_once('.').ok_or(CsrfError::Invalid)?;
        let (nonce_hex, issued) = payload.split_once('.').ok_or(CsrfError::Invalid)?;

        if nonce_hex.len() != NONCE_BYTES * 2 || hex::decode(nonce_hex).is_err() {
            return Err(CsrfError::Invalid);
        }
        let issued: i64 = issued.parse().map_err(|_| CsrfError::Invalid)?;
        let expected = hex::decode(mac_hex).map_err(|_| CsrfError::Invalid)?;

        self.mac(payload)
            .verify_slice(&expected)
            .map_err(|_| CsrfError::Invalid)?;

        if now.saturating_sub(issued) > self.time_limit_seconds {
            return Err(CsrfError::Expired);
        }

        Ok(())
    }

    fn mac(&self, payload: &str) -> HmacSha256 {
        let mut mac =
            HmacSha256::new_from_slice(&self.key).expect("HMAC accepts any key length");
        mac.update(payload.as_bytes());
        mac
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn protection() -> CsrfProtection {
        CsrfProtection::new("test-secret-key", 3600).unwrap()
    }

    #[test]
    fn test_new_rejects_empty_key() {
        assert!(CsrfProtection::new("", 3600).is_err());
    }

    #[test]
    fn test_new_rejects_zero_time_limit() {
        assert!(CsrfProtection::new("key", 0).is_err());
    }

    #[test]
    fn test_fresh_token_verifies() {
        let csrf = protection();
        let token = csrf.generate();

        assert_eq!(csrf.verify(&token), Ok(()));
    }

    #[test]
    fn test_tokens_are_unique() {
        let csrf = protection();

        assert_ne!(csrf.generate(), csrf.generate());
    }

    #[test]
    fn test_empty_token_is_missing() {
        assert_eq!(protection().verify(""), Err(CsrfError::Missing));
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let csrf = protection();

        assert_eq!(csrf.verify("not-a-token"), Err(CsrfError::Invalid));
        assert_eq!(csrf.verify("a.b.c"), Err(CsrfError::Invalid));
    }

    #[test]
    fn test_tampered_timestamp_is_invalid() {
        let csrf = protection();
        let token = csrf.generate_at(1_000);
        let (nonce, rest) = token.split_once('.').unwrap();
        let (_, mac) = rest.split_once('.').unwrap();
        let forged = format!("{nonce}.2000.{mac}");

        assert_eq!(csrf.verify_at(&forged, 2_000), Err(CsrfError::Invalid));
    }

    #[test]
    fn test_token_from_other_key_is_invalid() {
        let other = CsrfProtection::new("another-key", 3600).unwrap();
        let token = other.generate();

        assert_eq!(protection().verify(&token), Err(CsrfError::Invalid));
    }

    #[test]
    fn test_old_token_is_expired() {
        let csrf = protection();
        let token = csrf.generate_at(1_000);

        assert_eq!(csrf.verify_at(&token, 1_000 + 3600), Ok(()));
        assert_eq!(csrf.verify_at(&token, 1_000 + 3601), Err(CsrfError::Expired));
    }

    #[test]
    fn test_disabled_accepts_anything() {
        let csrf = protection().disabled();

        assert!(!csrf.is_enabled());
        assert_eq!(csrf.verify(""), Ok(()));
        assert_eq!(csrf.verify("garbage"), Ok(()));
    }
}
