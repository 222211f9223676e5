//! Redis implementation of the `KeyValueStore` port.

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use kurs_types::{CacheError, KeyValueStore};

/// Redis-backed cache store.
///
/// Uses a [`ConnectionManager`], which multiplexes one connection and
/// reconnects on failure. TTL enforcement is delegated to Redis itself
/// (`SET ... EX`); expired keys read back as absent.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Connects to the Redis instance at `host:port`.
    pub async fn connect(host: &str, port: u16) -> anyhow::Result<Self> {
        let client = redis::Client::open(format!("redis://{host}:{port}"))?;
        let conn = ConnectionManager::new(client).await?;
        tracing::info!("Connected to Redis at {}:{}", host, port);
        Ok(Self { conn })
    }
}

fn store_err(err: redis::RedisError) -> CacheError {
    CacheError::Store(err.to_string())
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.conn.clone();
        conn.get(key).await.map_err(store_err)
    }

    async fn set(&self, key: &str, value: &str, ttl_secs: i64) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        if ttl_secs > 0 {
            let _: () = conn
                .set_ex(key, value, ttl_secs as u64)
                .await
                .map_err(store_err)?;
        } else {
            let _: () = conn.set(key, value).await.map_err(store_err)?;
        }
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<bool, CacheError> {
        let mut conn = self.conn.clone();
        let removed: i64 = conn.del(key).await.map_err(store_err)?;
        Ok(removed > 0)
    }

    async fn has(&self, key: &str) -> Result<bool, CacheError> {
        let mut conn = self.conn.clone();
        conn.exists(key).await.map_err(store_err)
    }
}
