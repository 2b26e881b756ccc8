use time::Duration;

use crate::error::Error;

/// Default name of the guest session cookie.
pub const SESSION_COOKIE_NAME: &str = "checkout_session";

/// Shared guard settings used by both config and runtime state.
#[derive(Clone)]
pub(crate) struct GuardSettings {
    pub(crate) cookie_name: String,
    pub(crate) session_ttl: Duration,
    pub(crate) secure_cookies: bool,
    pub(crate) enforce_csrf: bool,
}

impl GuardSettings {
    fn defaults() -> Self {
        Self {
            cookie_name: SESSION_COOKIE_NAME.into(),
            session_ttl: Duration::hours(24),
            secure_cookies: true,
            enforce_csrf: true,
        }
    }
}

/// Checkout guard configuration.
///
/// The required field (the signing secret) is a constructor parameter — no
/// runtime "missing secret" errors.
///
/// Use [`from_env()`](CheckoutGuardConfig::from_env) for convention-based
/// setup, or [`new()`](CheckoutGuardConfig::new) with `with_*` methods for
/// full control.
pub struct CheckoutGuardConfig {
    pub(super) secret: String,
    pub(super) settings: GuardSettings,
}

impl CheckoutGuardConfig {
    /// Create config with the required signing secret.
    ///
    /// All optional fields use secure defaults. Override with `with_*` methods.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            settings: GuardSettings::defaults(),
        }
    }

    /// Create config from environment variables.
    ///
    /// # Required env vars
    /// - `CHECKOUT_SIGNING_SECRET`: HMAC key for session tokens
    ///
    /// # Optional env vars
    /// - `CHECKOUT_DEV_MODE`: Set to `"1"` or `"true"` to omit the `Secure`
    ///   cookie attribute (local, non-TLS development only)
    /// - `CHECKOUT_E2E_TEST_MODE`: Set to `"1"` or `"true"` to disable CSRF
    ///   enforcement. For automated end-to-end test runs exclusively; must
    ///   never be set in a production deployment profile.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `CHECKOUT_SIGNING_SECRET` is missing or
    /// empty. There is no fallback key.
    pub fn from_env() -> Result<Self, Error> {
        let secret = std::env::var("CHECKOUT_SIGNING_SECRET")
            .map_err(|_| Error::Config("CHECKOUT_SIGNING_SECRET is required".into()))?;
        if secret.is_empty() {
            return Err(Error::Config(
                "CHECKOUT_SIGNING_SECRET must not be empty".into(),
            ));
        }

        let dev_mode = matches!(
            std::env::var("CHECKOUT_DEV_MODE").as_deref(),
            Ok("1") | Ok("true"),
        );
        let e2e_mode = matches!(
            std::env::var("CHECKOUT_E2E_TEST_MODE").as_deref(),
            Ok("1") | Ok("true"),
        );

        Ok(Self::new(secret)
            .with_secure_cookies(!dev_mode)
            .with_csrf_enforcement(!e2e_mode))
    }

    #[must_use]
    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.settings.cookie_name = name.into();
        self
    }

    #[must_use]
    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.settings.session_ttl = ttl;
        self
    }

    #[must_use]
    pub fn with_secure_cookies(mut self, secure: bool) -> Self {
        self.settings.secure_cookies = secure;
        self
    }

    /// Enable or disable CSRF enforcement on state-changing guest requests.
    ///
    /// Disabling is a testability affordance for end-to-end harnesses, not a
    /// security feature. Production deployments keep this on.
    #[must_use]
    pub fn with_csrf_enforcement(mut self, enforce: bool) -> Self {
        self.settings.enforce_csrf = enforce;
        self
    }
}
