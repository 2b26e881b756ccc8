//! Checkout access-control middleware for Axum storefronts.
//!
//! This module decides whether an inbound request may read or mutate a
//! specific in-progress checkout, for signed-in customers and anonymous
//! guests alike.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use checkout_guard::{AccessRequest, CheckoutAccessGuard, CheckoutGuardConfig};
//!
//! // 1. Implement the CheckoutStore trait for your storage layer
//! // 2. Configure from environment
//! let config = CheckoutGuardConfig::from_env()?;
//! let guard = CheckoutAccessGuard::new(config, store)?;
//!
//! // 3. Authorize each checkout request
//! let decision = guard
//!     .authorize(&checkout_id, &AccessRequest::from_parts(&parts))
//!     .await?;
//!
//! // 4. Attach the session cookie when a guest checkout is created
//! let cookie = guard.cookie_factory().issue(&checkout_id);
//! ```

mod authorize;
mod config;
mod cookies;
mod error;
mod extractor;
mod traits;
mod types;

pub use authorize::CheckoutAccessGuard;
pub use config::{CheckoutGuardConfig, SESSION_COOKIE_NAME};
pub use cookies::SessionCookieFactory;
pub use error::DenyReason;
pub use extractor::{AccessRequest, CSRF_HEADER};
pub use traits::CheckoutStore;
pub use types::{AccessDecision, CheckoutRecord};
