use std::future::Future;

use super::types::CheckoutRecord;
use crate::types::CheckoutId;

/// Consumer-provided checkout persistence.
///
/// The guard needs exactly one read: look up a checkout by id. How records
/// are stored, indexed, or expired out of storage is the consumer's concern.
///
/// # Example
///
/// ```rust,ignore
/// impl CheckoutStore for MyAppState {
///     async fn find_checkout(
///         &self,
///         id: &CheckoutId,
///     ) -> Result<Option<CheckoutRecord>, Box<dyn std::error::Error + Send + Sync>> {
///         self.db.find_checkout(id.as_str()).await
///     }
/// }
/// ```
pub trait CheckoutStore: Send + Sync + 'static {
    /// Look up a checkout by id. `Ok(None)` means the id resolves to nothing;
    /// `Err` is an infrastructure failure (connection, query), not a denial.
    fn find_checkout(
        &self,
        id: &CheckoutId,
    ) -> impl Future<Output = Result<Option<CheckoutRecord>, Box<dyn std::error::Error + Send + Sync>>>
           + Send;
}
