//! Configuration loading from environment.

use std::env;

/// Application configuration.
///
/// Read once at startup and passed into the adapters at construction
/// time; nothing reads the environment mid-operation.
pub struct Config {
    pub port: u16,
    pub provider_api_url: String,
    pub cache_ttl_secs: i64,
    pub redis_host: String,
    pub redis_port: u16,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let provider_api_url = env::var("PROVIDER_API_URL")
            .map_err(|_| anyhow::anyhow!("PROVIDER_API_URL environment variable is required"))?;

        let cache_ttl_secs = env::var("CACHE_TTL_SECS")
            .unwrap_or_else(|_| "60".to_string())
            .parse()?;

        let redis_host = env::var("REDIS_HOST").unwrap_or_else(|_| "localhost".to_string());

        let redis_port = env::var("REDIS_PORT")
            .unwrap_or_else(|_| "6379".to_string())
            .parse()?;

        Ok(Self {
            port,
            provider_api_url,
            cache_ttl_secs,
            redis_host,
            redis_port,
        })
    }
}
