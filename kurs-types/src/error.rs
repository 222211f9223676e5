//! Error types for the exchange service.

use crate::domain::CurrencyCode;

/// Rate provider failures (remote fetch, error payload, empty table).
///
/// Never retried internally; a single attempt per call. Retry policy,
/// if any, belongs to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("empty rates")]
    Empty,

    /// The provider answered with an error description instead of rates.
    #[error("{0}")]
    Upstream(String),

    #[error("provider request failed: {0}")]
    Transport(String),
}

/// No direct or two-hop path exists between the requested codes.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("exchange direction not found")]
    DirectionNotFound {
        from: CurrencyCode,
        to: CurrencyCode,
    },
}

/// Cache store failures. A store outage is distinct from a cache miss:
/// a miss is `Ok(None)` on the read path, an outage is this error.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache store error: {0}")]
    Store(String),

    #[error("cached value is not a valid rate table: {0}")]
    Decode(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream provider error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        AppError::Upstream(err.to_string())
    }
}

impl From<CacheError> for AppError {
    fn from(err: CacheError) -> Self {
        AppError::Internal(err.to_string())
    }
}
