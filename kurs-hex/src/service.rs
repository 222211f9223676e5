//! Exchange Application Service
//!
//! Orchestrates the rate cache, the provider client and the conversion
//! logic. Contains NO infrastructure logic - pure orchestration over the
//! injected ports.

use kurs_types::{
    AppError, Conversion, ConvertRequest, CurrencyCode, KeyValueStore, RateGraph, RateProvider,
    RateTable, domain::convert,
};

use crate::cache::RateCache;

/// Cache key the current rate table is stored under.
const RATES_KEY: &str = "monobank";

/// Application service for rate and conversion operations.
///
/// Generic over `S: KeyValueStore` and `P: RateProvider` - the adapters
/// are injected at compile time. This enables:
/// - Swapping the store or provider without code changes
/// - Testing with the in-memory store and a mock provider
/// - Compile-time checks for port implementation
pub struct RateService<S: KeyValueStore, P: RateProvider> {
    cache: RateCache<S>,
    provider: P,
}

impl<S: KeyValueStore, P: RateProvider> RateService<S, P> {
    /// Creates the service. `cache_ttl_secs <= 0` caches without expiry.
    pub fn new(store: S, provider: P, cache_ttl_secs: i64) -> Self {
        Self {
            cache: RateCache::new(store, RATES_KEY, cache_ttl_secs),
            provider,
        }
    }

    /// Fetches a fresh table from the provider and stores it in the cache.
    ///
    /// A store failure here propagates: the caller must be able to tell a
    /// refreshed cache from a fetch that could not be persisted.
    pub async fn update_rates(&self) -> Result<RateTable, AppError> {
        let table = self.provider.fetch().await?;
        self.cache.put(&table).await?;
        tracing::info!("Rates updated, {} entries", table.len());
        Ok(table)
    }

    /// Current rate table, cache-aside.
    ///
    /// Cache hit returns the cached snapshot. A miss fetches from the
    /// provider and stores the result. A store outage on the read path is
    /// logged and falls back to the same fetch path as a miss. There is no
    /// single-flight de-duplication: concurrent misses may each fetch, the
    /// last write wins.
    pub async fn current_rates(&self) -> Result<RateTable, AppError> {
        match self.cache.get().await {
            Ok(Some(table)) => {
                tracing::debug!("Rates from cache");
                Ok(table)
            }
            Ok(None) => self.update_rates().await,
            Err(err) => {
                tracing::warn!("Cache store unavailable, falling back to fetch: {err}");
                self.update_rates().await
            }
        }
    }

    /// Distinct currency codes in the current table, ascending.
    pub async fn available_currencies(&self) -> Result<Vec<CurrencyCode>, AppError> {
        Ok(self.current_rates().await?.currencies())
    }

    /// Resolves a conversion against a graph built from the current table.
    pub async fn convert(&self, req: ConvertRequest) -> Result<Conversion, AppError> {
        // The negated comparison also rejects NaN.
        if !(req.amount > 0.0) {
            return Err(AppError::BadRequest("Amount must be positive".into()));
        }
        if req.currency_from == req.currency_to {
            return Err(AppError::BadRequest(
                "Source and target currencies must differ".into(),
            ));
        }

        let table = self.current_rates().await?;
        let graph = RateGraph::build(&table);
        convert(req.amount, req.currency_from, req.currency_to, &graph).map_err(Into::into)
    }
}
