use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::error::Error;

type HmacSha256 = Hmac<Sha256>;

/// Derives and verifies checkout session tokens.
///
/// A token is `hex(HMAC-SHA256(secret, checkout_id))` — a pure function of
/// the secret and the checkout id, so verification is recomputation rather
/// than a lookup. One canonical token exists per `(secret, checkout_id)`
/// pair; expiry is carried by the checkout record, not the token.
#[derive(Clone)]
pub struct SessionTokenCodec {
    mac: HmacSha256,
}

impl SessionTokenCodec {
    /// Creates a codec from the checkout signing secret.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the secret is empty. An empty key would
    /// make every checkout token forgeable, so it is rejected at
    /// construction rather than falling back silently.
    pub fn new(secret: &str) -> Result<Self, Error> {
        if secret.is_empty() {
            return Err(Error::Config(
                "checkout signing secret must not be empty".into(),
            ));
        }
        let mac = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|e| Error::Config(format!("checkout signing secret rejected: {e}")))?;
        Ok(Self { mac })
    }

    /// Computes the session token for a checkout id (64 hex chars).
    ///
    /// Deterministic: the same secret and id always yield the same token.
    #[must_use]
    pub fn issue(&self, checkout_id: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(checkout_id.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Verifies a candidate token against the expected token for `checkout_id`.
    ///
    /// Length-checks first, then compares equal-length buffers in constant
    /// time. Never panics, whatever the candidate's length or content.
    #[must_use]
    pub fn verify(&self, checkout_id: &str, candidate: &str) -> bool {
        let expected = self.issue(checkout_id);
        let expected = expected.as_bytes();
        let candidate = candidate.as_bytes();
        expected.len() == candidate.len() && bool::from(expected.ct_eq(candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> SessionTokenCodec {
        SessionTokenCodec::new("test-signing-secret").unwrap()
    }

    #[test]
    fn test_issue_deterministic() {
        let codec = codec();
        assert_eq!(codec.issue("chk_1"), codec.issue("chk_1"));
    }

    #[test]
    fn test_issue_is_64_hex_chars() {
        let token = codec().issue("chk_1");
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_verify_accepts_issued_token() {
        let codec = codec();
        let token = codec.issue("chk_1");
        assert!(codec.verify("chk_1", &token));
    }

    #[test]
    fn test_verify_rejects_token_for_other_id() {
        let codec = codec();
        let token = codec.issue("chk_1");
        assert!(!codec.verify("chk_2", &token));
    }

    #[test]
    fn test_verify_rejects_other_secret() {
        let other = SessionTokenCodec::new("different-secret").unwrap();
        let token = other.issue("chk_1");
        assert!(!codec().verify("chk_1", &token));
    }

    #[test]
    fn test_verify_handles_any_candidate_length() {
        let codec = codec();
        assert!(!codec.verify("chk_1", ""));
        assert!(!codec.verify("chk_1", "short"));
        assert!(!codec.verify("chk_1", &"a".repeat(10_000)));
    }

    #[test]
    fn test_verify_rejects_tampered_token() {
        let codec = codec();
        let mut token = codec.issue("chk_1");
        let flipped = if token.ends_with('0') { '1' } else { '0' };
        token.pop();
        token.push(flipped);
        assert!(!codec.verify("chk_1", &token));
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert!(SessionTokenCodec::new("").is_err());
    }
}
