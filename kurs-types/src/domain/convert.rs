//! Conversion resolution over the rate graph.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::graph::RateGraph;
use super::rate::CurrencyCode;
use crate::error::ConversionError;

/// How a conversion was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ConversionKind {
    /// One direct rate lookup.
    Single,
    /// Exactly one intermediate currency.
    Double,
}

/// Outcome of a resolved conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Conversion {
    /// Converted amount in the target currency.
    #[schema(example = 39400.0)]
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: ConversionKind,
    /// Currency codes along the path walked, in order.
    #[schema(example = json!([840, 980]))]
    pub exchanges: Vec<CurrencyCode>,
}

/// Resolves a conversion through the graph.
///
/// A direct rate always wins. Failing that, a single intermediate hop is
/// searched in ascending order of the intermediate code; the first pair of
/// edges that connects `from` to `to` is taken. There is no optimality
/// guarantee and paths of two or more intermediate hops are never searched.
///
/// `amount > 0` is the caller's responsibility; it is validated at the
/// service boundary, not here.
pub fn convert(
    amount: f64,
    from: CurrencyCode,
    to: CurrencyCode,
    graph: &RateGraph,
) -> Result<Conversion, ConversionError> {
    if let Some(factor) = graph.factor(from, to) {
        return Ok(Conversion {
            amount: amount * factor,
            kind: ConversionKind::Single,
            exchanges: vec![from, to],
        });
    }

    for (mid, first) in graph.outgoing(from) {
        if let Some(second) = graph.factor(mid, to) {
            return Ok(Conversion {
                amount: amount * first * second,
                kind: ConversionKind::Double,
                exchanges: vec![from, mid, to],
            });
        }
    }

    Err(ConversionError::DirectionNotFound { from, to })
}
