use axum_extra::extract::cookie::{Cookie, SameSite};
use time::{Duration, OffsetDateTime};

use crate::token::SessionTokenCodec;
use crate::types::CheckoutId;

/// Builds the guest session cookie for a freshly created checkout.
///
/// Minted exactly once per guest checkout, at creation — re-minting would
/// invalidate the cookie the browser already holds.
pub struct SessionCookieFactory {
    codec: SessionTokenCodec,
    cookie_name: String,
    ttl: Duration,
    secure: bool,
}

impl SessionCookieFactory {
    pub(super) fn new(
        codec: SessionTokenCodec,
        cookie_name: String,
        ttl: Duration,
        secure: bool,
    ) -> Self {
        Self {
            codec,
            cookie_name,
            ttl,
            secure,
        }
    }

    /// Create the session cookie for `checkout_id`.
    ///
    /// `HttpOnly` keeps the token out of script reach; `SameSite=Strict`
    /// blocks the primary cross-site vector; `Secure` is omitted only in dev
    /// mode. Expiry is absolute, 24 hours from issuance by default.
    #[must_use]
    pub fn issue(&self, checkout_id: &CheckoutId) -> Cookie<'static> {
        let token = self.codec.issue(checkout_id.as_str());
        Cookie::build((self.cookie_name.clone(), token))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(self.secure)
            .expires(OffsetDateTime::now_utc() + self.ttl)
            .build()
    }

    /// Create the removal cookie (drop the session after completion/expiry).
    #[must_use]
    pub fn clear(&self) -> Cookie<'static> {
        Cookie::build((self.cookie_name.clone(), ""))
            .path("/")
            .max_age(Duration::ZERO)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factory(secure: bool) -> SessionCookieFactory {
        SessionCookieFactory::new(
            SessionTokenCodec::new("test-signing-secret").unwrap(),
            "checkout_session".into(),
            Duration::hours(24),
            secure,
        )
    }

    #[test]
    fn issue_sets_security_attributes() {
        let cookie = factory(true).issue(&CheckoutId::from("chk_1"));
        assert_eq!(cookie.name(), "checkout_session");
        assert_eq!(cookie.value().len(), 64);
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.secure(), Some(true));
        assert!(cookie.expires_datetime().is_some());
    }

    #[test]
    fn issue_omits_secure_in_dev_mode() {
        let header = factory(false).issue(&CheckoutId::from("chk_1")).to_string();
        assert!(!header.contains("Secure"));
        assert!(header.contains("HttpOnly"));
    }

    #[test]
    fn issue_carries_verifiable_token() {
        let codec = SessionTokenCodec::new("test-signing-secret").unwrap();
        let cookie = factory(true).issue(&CheckoutId::from("chk_1"));
        assert!(codec.verify("chk_1", cookie.value()));
    }

    #[test]
    fn expiry_is_roughly_24h_out() {
        let cookie = factory(true).issue(&CheckoutId::from("chk_1"));
        let expires = cookie.expires_datetime().unwrap();
        let delta = expires - OffsetDateTime::now_utc();
        assert!(delta > Duration::hours(23) && delta <= Duration::hours(24));
    }

    #[test]
    fn clear_expires_immediately() {
        let cookie = factory(true).clear();
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }
}
