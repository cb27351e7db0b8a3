use async_trait::async_trait;

use super::error::Result;

/// Source of breach names for an email address.
///
/// The batch runner only needs this one lookup, so it takes the trait
/// rather than the full API client; tests substitute a stub.
#[async_trait]
pub trait BreachLookup: Send + Sync {
    /// Breach names the email appears in.
    ///
    /// `Ok(None)` means the service has no data for the address, which is
    /// a successful "clean" check, not an error.
    async fn breach_names(&self, email: &str) -> Result<Option<Vec<String>>>;
}
