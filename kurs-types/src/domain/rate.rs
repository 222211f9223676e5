//! Rate table snapshot as published by the provider.

use serde::{Deserialize, Serialize};
use std::fmt;

use utoipa::ToSchema;

/// ISO-4217 numeric currency code (e.g. 840 = USD, 978 = EUR, 980 = UAH).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(value_type = u32, example = 840)]
pub struct CurrencyCode(pub u32);

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CurrencyCode {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

/// One published rate between a currency pair.
///
/// Exactly one of `{rate_buy, rate_sell}` or `{rate_cross}` is populated
/// per entry. That shape is guaranteed by the provider and is not
/// re-validated here; an entry matching neither form contributes no edge
/// to the rate graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RateEntry {
    pub currency_code_a: CurrencyCode,
    pub currency_code_b: CurrencyCode,
    /// Unix timestamp of the quote, when the provider reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_buy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_sell: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_cross: Option<f64>,
}

impl RateEntry {
    /// A buy/sell quoted pair.
    pub fn buy_sell(a: CurrencyCode, b: CurrencyCode, buy: f64, sell: f64) -> Self {
        Self {
            currency_code_a: a,
            currency_code_b: b,
            date: None,
            rate_buy: Some(buy),
            rate_sell: Some(sell),
            rate_cross: None,
        }
    }

    /// A cross-quoted pair.
    pub fn cross(a: CurrencyCode, b: CurrencyCode, rate: f64) -> Self {
        Self {
            currency_code_a: a,
            currency_code_b: b,
            date: None,
            rate_buy: None,
            rate_sell: None,
            rate_cross: Some(rate),
        }
    }
}

/// Full rate snapshot fetched from the provider at one instant.
///
/// Immutable once fetched; a new fetch replaces the table wholesale,
/// never merges into it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct RateTable(pub Vec<RateEntry>);

impl RateTable {
    pub fn new(entries: Vec<RateEntry>) -> Self {
        Self(entries)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RateEntry> {
        self.0.iter()
    }

    /// Distinct currency codes present in the table, ascending, deduplicated.
    pub fn currencies(&self) -> Vec<CurrencyCode> {
        let mut codes: Vec<CurrencyCode> = self
            .0
            .iter()
            .flat_map(|entry| [entry.currency_code_a, entry.currency_code_b])
            .collect();
        codes.sort_unstable();
        codes.dedup();
        codes
    }
}

impl<'a> IntoIterator for &'a RateTable {
    type Item = &'a RateEntry;
    type IntoIter = std::slice::Iter<'a, RateEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
