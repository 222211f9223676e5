//! Domain models and conversion logic for the exchange service.

pub mod convert;
pub mod graph;
pub mod rate;

pub use convert::{Conversion, ConversionKind, convert};
pub use graph::RateGraph;
pub use rate::{CurrencyCode, RateEntry, RateTable};
