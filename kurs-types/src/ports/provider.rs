//! Rate provider port.
//!
//! Implementations fetch the published rate table from a remote pricing
//! source. One network call per invocation, no retry; callers decide
//! whether and when to refetch.

use crate::domain::RateTable;
use crate::error::ProviderError;

/// Port trait for remote rate providers.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetches the current rate table.
    ///
    /// Fails with [`ProviderError::Empty`] when the provider returns zero
    /// entries and [`ProviderError::Upstream`] when it returns an error
    /// description instead of rates.
    async fn fetch(&self) -> Result<RateTable, ProviderError>;
}
