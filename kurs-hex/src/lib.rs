//! # Kurs Hex
//!
//! Application service layer and HTTP adapter for the exchange service.
//!
//! ## Architecture
//!
//! - `cache/` - Rate cache (serialization + TTL over the key/value port)
//! - `service/` - Application service (cache-aside orchestration)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `S: KeyValueStore` and `P: RateProvider`,
//! allowing different store and provider implementations to be injected.

pub mod cache;
pub mod inbound;
mod openapi;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use cache::RateCache;
pub use service::RateService;
