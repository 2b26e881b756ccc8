use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::error::DenyReason;
use crate::types::{CheckoutId, CustomerId};

/// Read-only snapshot of a checkout session, as loaded from the store.
///
/// The guard never writes this record. Lifecycle is one-way: an active
/// checkout becomes completed or expired and never reverses, so both
/// terminal states are treated as immutable denials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRecord {
    /// Unique checkout identifier.
    pub id: CheckoutId,
    /// Owning customer; `None` means guest checkout.
    pub customer_id: Option<CustomerId>,
    /// Set once the purchase completes. Terminal.
    #[serde(with = "time::serde::rfc3339::option")]
    pub completed_at: Option<OffsetDateTime>,
    /// Hard deadline for the session. Terminal once passed.
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
}

impl CheckoutRecord {
    /// Whether a prior purchase flow finished this checkout.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Whether the checkout TTL has elapsed as of `now`.
    #[must_use]
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        self.expires_at <= now
    }

    /// Whether this checkout has no owning customer.
    #[must_use]
    pub fn is_guest(&self) -> bool {
        self.customer_id.is_none()
    }
}

/// Outcome of [`CheckoutAccessGuard::authorize`](super::CheckoutAccessGuard::authorize).
///
/// A grant always carries the checkout record; a denial always carries a
/// reason. Storage failures are not decisions — they surface as
/// [`Error::Store`](crate::Error::Store) instead.
#[derive(Debug, Clone)]
pub enum AccessDecision {
    /// Request may read or mutate the checkout.
    Granted(CheckoutRecord),
    /// Request is refused for the given reason.
    Denied(DenyReason),
}

impl AccessDecision {
    #[must_use]
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted(_))
    }

    /// The checkout record, when access was granted.
    #[must_use]
    pub fn checkout(&self) -> Option<&CheckoutRecord> {
        match self {
            Self::Granted(checkout) => Some(checkout),
            Self::Denied(_) => None,
        }
    }

    /// The denial reason, when access was refused.
    #[must_use]
    pub fn deny_reason(&self) -> Option<DenyReason> {
        match self {
            Self::Granted(_) => None,
            Self::Denied(reason) => Some(*reason),
        }
    }
}
