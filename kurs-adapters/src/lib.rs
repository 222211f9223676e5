//! # Kurs Adapters
//!
//! Concrete outbound adapters for the exchange service.
//! This crate provides the cache store implementations of the
//! `KeyValueStore` port and the HTTP client implementation of the
//! `RateProvider` port.

pub mod memory;
pub mod monobank;
pub mod redis_store;

pub use memory::MemoryStore;
pub use monobank::MonobankClient;
pub use redis_store::RedisStore;
