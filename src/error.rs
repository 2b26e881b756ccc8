#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Missing or invalid configuration (e.g. absent signing secret).
    #[error("Configuration error: {0}")]
    Config(String),
    /// Checkout store operation failed. An infrastructure failure, distinct
    /// from an authorization denial.
    #[error("Checkout store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}
