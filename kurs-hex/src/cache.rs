//! Time-bounded rate table cache over the key/value store port.

use kurs_types::{CacheError, KeyValueStore, RateTable};

/// Caches the last-fetched rate table under a fixed key.
///
/// Owns the JSON serialization of the table and the TTL handed to the
/// store; expiry itself is enforced by the store. A read distinguishes a
/// miss (`Ok(None)`) from a store outage (`Err`).
pub struct RateCache<S: KeyValueStore> {
    store: S,
    key: String,
    ttl_secs: i64,
}

impl<S: KeyValueStore> RateCache<S> {
    /// `ttl_secs <= 0` caches without expiry.
    pub fn new(store: S, key: impl Into<String>, ttl_secs: i64) -> Self {
        Self {
            store,
            key: key.into(),
            ttl_secs,
        }
    }

    /// Cached table, if a live entry exists.
    pub async fn get(&self) -> Result<Option<RateTable>, CacheError> {
        match self.store.get(&self.key).await? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| CacheError::Decode(e.to_string())),
            None => Ok(None),
        }
    }

    /// Stores a fresh snapshot, replacing any previous entry wholesale.
    pub async fn put(&self, table: &RateTable) -> Result<(), CacheError> {
        let raw =
            serde_json::to_string(table).map_err(|e| CacheError::Decode(e.to_string()))?;
        self.store.set(&self.key, &raw, self.ttl_secs).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurs_types::CurrencyCode;
    use kurs_types::domain::rate::RateEntry;

    use kurs_adapters::MemoryStore;

    fn sample_table() -> RateTable {
        RateTable::new(vec![RateEntry::buy_sell(
            CurrencyCode(840),
            CurrencyCode(980),
            38.9,
            39.4,
        )])
    }

    #[tokio::test]
    async fn test_round_trips_rate_table() {
        let cache = RateCache::new(MemoryStore::new(), "rates", 0);
        let table = sample_table();

        cache.put(&table).await.unwrap();

        assert_eq!(cache.get().await.unwrap(), Some(table));
    }

    #[tokio::test]
    async fn test_empty_cache_is_a_miss() {
        let cache = RateCache::new(MemoryStore::new(), "rates", 0);

        assert_eq!(cache.get().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_entry_is_a_decode_error() {
        let store = MemoryStore::new();
        store.set("rates", "not json", 0).await.unwrap();
        let cache = RateCache::new(store, "rates", 0);

        let err = cache.get().await.unwrap_err();

        assert!(matches!(err, CacheError::Decode(_)));
    }
}
