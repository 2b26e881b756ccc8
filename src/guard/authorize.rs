use std::sync::Arc;

use time::OffsetDateTime;

use super::config::CheckoutGuardConfig;
use super::cookies::SessionCookieFactory;
use super::error::DenyReason;
use super::extractor::AccessRequest;
use super::traits::CheckoutStore;
use super::types::AccessDecision;
use crate::error::Error;
use crate::token::SessionTokenCodec;
use crate::types::CheckoutId;

/// The single authorization decision point for checkout requests.
///
/// Stateless and reentrant: every input is request-scoped plus one read of
/// the consumer's [`CheckoutStore`]. The guard performs no writes, so an
/// aborted request leaves nothing to unwind.
pub struct CheckoutAccessGuard<S> {
    store: Arc<S>,
    codec: SessionTokenCodec,
    settings: super::config::GuardSettings,
}

impl<S: CheckoutStore> CheckoutAccessGuard<S> {
    /// Build the guard, deriving the token codec from the configured secret.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the signing secret is empty. Fails at
    /// startup so a misconfigured deployment never serves requests with a
    /// forgeable key.
    pub fn new(config: CheckoutGuardConfig, store: S) -> Result<Self, Error> {
        let codec = SessionTokenCodec::new(&config.secret)?;
        Ok(Self {
            store: Arc::new(store),
            codec,
            settings: config.settings,
        })
    }

    /// Decide whether `request` may access the checkout `checkout_id`.
    ///
    /// Lifecycle gating first (not-found, completed, expired — completion
    /// wins over expiry as the more specific diagnostic), then ownership:
    /// customer-owned checkouts pass unconditionally (the customer/session
    /// binding was established at creation and is enforced upstream), guest
    /// checkouts require the signed session cookie, and state-changing guest
    /// requests additionally require a CSRF token equal to the session token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Store`] if the store read fails. Authorization
    /// denials are not errors; they come back as [`AccessDecision::Denied`].
    pub async fn authorize(
        &self,
        checkout_id: &CheckoutId,
        request: &AccessRequest,
    ) -> Result<AccessDecision, Error> {
        let Some(checkout) = self
            .store
            .find_checkout(checkout_id)
            .await
            .map_err(Error::Store)?
        else {
            return Ok(AccessDecision::Denied(DenyReason::NotFound));
        };

        if checkout.is_completed() {
            return Ok(AccessDecision::Denied(DenyReason::AlreadyCompleted));
        }
        if checkout.is_expired(OffsetDateTime::now_utc()) {
            return Ok(AccessDecision::Denied(DenyReason::Expired));
        }

        if !checkout.is_guest() {
            return Ok(AccessDecision::Granted(checkout));
        }

        // Guest checkout: entitlement is possession of the signed cookie.
        // A brand-new guest checkout with no token is still denied — there
        // is no first-touch trust.
        let Some(token) = request.session_token(&self.settings.cookie_name) else {
            return Ok(AccessDecision::Denied(DenyReason::SessionTokenRequired));
        };
        if !self.codec.verify(checkout_id.as_str(), token) {
            tracing::warn!(checkout_id = %checkout_id, "Session token verification failed");
            return Ok(AccessDecision::Denied(DenyReason::InvalidSessionToken));
        }

        if self.settings.enforce_csrf && request.is_state_changing() {
            // The CSRF token must equal the session token, so forging it
            // requires the same capability as reading the cookie.
            let csrf_ok = request
                .csrf_token
                .as_deref()
                .is_some_and(|csrf| self.codec.verify(checkout_id.as_str(), csrf));
            if !csrf_ok {
                tracing::warn!(
                    checkout_id = %checkout_id,
                    method = %request.method,
                    "CSRF token missing or mismatched on state-changing request"
                );
                return Ok(AccessDecision::Denied(DenyReason::InvalidCsrfToken));
            }
        }

        Ok(AccessDecision::Granted(checkout))
    }

    /// Cookie factory sharing this guard's codec and cookie settings.
    #[must_use]
    pub fn cookie_factory(&self) -> SessionCookieFactory {
        SessionCookieFactory::new(
            self.codec.clone(),
            self.settings.cookie_name.clone(),
            self.settings.session_ttl,
            self.settings.secure_cookies,
        )
    }
}
