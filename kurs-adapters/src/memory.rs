//! In-memory implementation of the `KeyValueStore` port.
//!
//! Used by the service-layer tests and as a Redis-less development mode.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;

use kurs_types::{CacheError, KeyValueStore};

struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

/// Process-local cache store with lazy expiry.
///
/// Expired entries read back as absent and are removed on the read that
/// observes the expiry; there is no background sweeper.
#[derive(Default)]
pub struct MemoryStore {
    entries: DashMap<String, Entry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live value for a key, dropping the entry if its TTL elapsed.
    fn live(&self, key: &str) -> Option<String> {
        let expired = match self.entries.get(key) {
            Some(entry) if entry.is_expired() => true,
            Some(entry) => return Some(entry.value.clone()),
            None => return None,
        };
        if expired {
            self.entries.remove(key);
        }
        None
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.live(key))
    }

    async fn set(&self, key: &str, value: &str, ttl_secs: i64) -> Result<(), CacheError> {
        let expires_at =
            (ttl_secs > 0).then(|| Instant::now() + Duration::from_secs(ttl_secs as u64));
        self.entries.insert(
            key.to_owned(),
            Entry {
                value: value.to_owned(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.entries.remove(key).is_some())
    }

    async fn has(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.live(key).is_some())
    }
}
