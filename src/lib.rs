#![doc = include_str!("../README.md")]

pub mod error;
pub mod guard;
pub mod token;
pub mod types;

// Re-exports for convenient access
pub use error::Error;
pub use guard::{
    AccessDecision, AccessRequest, CheckoutAccessGuard, CheckoutGuardConfig, CheckoutRecord,
    CheckoutStore, DenyReason, SessionCookieFactory, CSRF_HEADER, SESSION_COOKIE_NAME,
};
pub use token::SessionTokenCodec;
pub use types::{CheckoutId, CustomerId};
