//! Directed rate graph built from a rate table snapshot.

use std::collections::BTreeMap;

use super::rate::{CurrencyCode, RateTable};

/// Directed mapping from an ordered currency pair to a multiplicative
/// exchange factor: `amount_to = amount_from * factor`.
///
/// Built fresh from a [`RateTable`] for every conversion request; it is
/// cheap relative to the provider fetch and carries no state between
/// requests. Edges are kept in a map-of-maps keyed by integer currency
/// code, so iteration order is ascending by source then target and
/// two-hop search results are reproducible.
///
/// Factor conventions:
/// - cross entry: factor(A→B) = `rate_cross`, factor(B→A) = `1/rate_cross`,
///   so a cross-only round trip returns the original amount exactly;
/// - buy/sell entry: factor(A→B) = `rate_sell`, factor(B→A) = `1/rate_buy`,
///   which keeps the bid/ask spread on both directions.
///
/// If the same ordered pair appears in several entries, the last entry
/// in table order wins.
#[derive(Debug, Clone, Default)]
pub struct RateGraph {
    edges: BTreeMap<CurrencyCode, BTreeMap<CurrencyCode, f64>>,
}

impl RateGraph {
    /// Builds the graph from a table snapshot. Pure, no I/O.
    pub fn build(table: &RateTable) -> Self {
        let mut graph = Self::default();
        for entry in table {
            let (a, b) = (entry.currency_code_a, entry.currency_code_b);
            if let Some(cross) = entry.rate_cross {
                graph.insert(a, b, cross);
                if cross > 0.0 {
                    graph.insert(b, a, 1.0 / cross);
                }
            } else if let (Some(buy), Some(sell)) = (entry.rate_buy, entry.rate_sell) {
                graph.insert(a, b, sell);
                if buy > 0.0 {
                    graph.insert(b, a, 1.0 / buy);
                }
            }
            // Entries carrying neither quote form contribute no edges.
        }
        graph
    }

    fn insert(&mut self, from: CurrencyCode, to: CurrencyCode, factor: f64) {
        self.edges.entry(from).or_default().insert(to, factor);
    }

    /// Exchange factor for the ordered pair, if a direct rate exists.
    pub fn factor(&self, from: CurrencyCode, to: CurrencyCode) -> Option<f64> {
        self.edges.get(&from)?.get(&to).copied()
    }

    /// Edges leaving `from`, ascending by target code.
    pub fn outgoing(&self, from: CurrencyCode) -> impl Iterator<Item = (CurrencyCode, f64)> {
        self.edges
            .get(&from)
            .into_iter()
            .flat_map(|targets| targets.iter().map(|(&to, &factor)| (to, factor)))
    }

    /// Number of directed edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeMap::len).sum()
    }
}
