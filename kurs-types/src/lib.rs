//! # Kurs Types
//!
//! Domain types and port traits for the currency exchange service.
//! This crate has ZERO external IO dependencies - only data structures,
//! conversion logic, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types and logic (RateTable, RateGraph, conversion)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Conversion, ConversionKind, CurrencyCode, RateEntry, RateGraph, RateTable};
pub use dto::*;
pub use error::{AppError, CacheError, ConversionError, ProviderError};
pub use ports::{KeyValueStore, RateProvider};
