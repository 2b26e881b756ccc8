use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Why a checkout request was refused.
///
/// Every denial is data, never a panic or an error: the caller maps reasons
/// to HTTP statuses (or uses the [`IntoResponse`] impl directly).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DenyReason {
    /// Checkout id does not resolve to a record.
    #[error("Checkout not found")]
    NotFound,

    /// Checkout finished a prior purchase flow.
    #[error("Checkout already completed")]
    AlreadyCompleted,

    /// Checkout TTL elapsed.
    #[error("Checkout expired")]
    Expired,

    /// Guest checkout with no session cookie presented.
    #[error("Checkout session required")]
    SessionTokenRequired,

    /// Session cookie present but fails verification.
    #[error("Invalid checkout session token")]
    InvalidSessionToken,

    /// State-changing request without a matching CSRF token.
    #[error("Invalid CSRF token")]
    InvalidCsrfToken,
}

impl DenyReason {
    /// HTTP status for this denial.
    #[must_use]
    pub fn status_code(self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::AlreadyCompleted => StatusCode::CONFLICT,
            Self::Expired => StatusCode::GONE,
            Self::SessionTokenRequired | Self::InvalidSessionToken => StatusCode::UNAUTHORIZED,
            Self::InvalidCsrfToken => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for DenyReason {
    fn into_response(self) -> Response {
        // Both token failures get the same body: distinguishing them would
        // hand an attacker a forgery oracle.
        let body = match self {
            Self::SessionTokenRequired | Self::InvalidSessionToken => {
                "Checkout session required"
            }
            Self::NotFound => "Checkout not found",
            Self::AlreadyCompleted => "Checkout already completed",
            Self::Expired => "Checkout expired",
            Self::InvalidCsrfToken => "Invalid CSRF token",
        };
        (self.status_code(), body).into_response()
    }
}
