//! Key/value cache store port.
//!
//! Implementations can be a Redis client, an in-memory map, etc.
//! Values are opaque serialized strings; serialization of domain types
//! is owned by the caller, not the store.

use crate::error::CacheError;

/// Port trait for a TTL-aware key/value store.
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` if the key is absent or its
    /// TTL has elapsed. A store outage is an `Err`, never a silent miss.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Stores a value. `ttl_secs <= 0` stores without expiry; otherwise
    /// the entry silently disappears after `ttl_secs` elapse.
    async fn set(&self, key: &str, value: &str, ttl_secs: i64) -> Result<(), CacheError>;

    /// Removes a key. Returns whether a value was present.
    async fn del(&self, key: &str) -> Result<bool, CacheError>;

    /// Whether a live value exists for the key.
    async fn has(&self, key: &str) -> Result<bool, CacheError>;
}
