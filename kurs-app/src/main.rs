//! # Kurs Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Connect the Redis cache store
//! - Create the provider client and rate service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kurs_adapters::{MonobankClient, RedisStore};
use kurs_hex::{RateService, inbound::HttpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,kurs_app=debug,kurs_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting exchange server on port {}", config.port);
    tracing::info!("Rate provider: {}", config.provider_api_url);

    // Connect the cache store
    let store = RedisStore::connect(&config.redis_host, config.redis_port).await?;

    // Create the rate service
    let provider = MonobankClient::new(&config.provider_api_url);
    let service = RateService::new(store, provider, config.cache_ttl_secs);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
