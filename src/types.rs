use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Checkout session identifier (opaque string, typically a UUID).
///
/// Assigned by the checkout-creation flow; immutable for the life of the
/// checkout. The session token for a guest checkout is derived from this id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into)]
#[serde(transparent)]
pub struct CheckoutId(pub String);

impl CheckoutId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CheckoutId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Owning customer identifier (opaque string).
///
/// Present on a [`CheckoutRecord`](crate::guard::CheckoutRecord) only when the
/// checkout was created by an authenticated customer; absent means guest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into)]
#[serde(transparent)]
pub struct CustomerId(pub String);

impl CustomerId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CustomerId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_id_serde_roundtrip() {
        let id = CheckoutId::from("chk_01HZX3");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"chk_01HZX3\"");
        let parsed: CheckoutId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn customer_id_from_string() {
        let id = CustomerId::from("cust-123".to_string());
        assert_eq!(id.to_string(), "cust-123");
    }

    #[test]
    fn newtypes_prevent_mixing() {
        fn takes_checkout_id(_: &CheckoutId) {}
        fn takes_customer_id(_: &CustomerId) {}

        let checkout = CheckoutId::from("id");
        let customer = CustomerId::from("id");

        takes_checkout_id(&checkout);
        takes_customer_id(&customer);
        // takes_checkout_id(&customer);  // Compile error!
        // takes_customer_id(&checkout);  // Compile error!
    }
}
