//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Conversion, CurrencyCode};

/// Request to compute a conversion between two currencies.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    /// Amount in the source currency; must be positive.
    #[schema(example = 1000.0)]
    pub amount: f64,
    /// Source currency. 840 - USD
    #[schema(example = 840)]
    pub currency_from: CurrencyCode,
    /// Target currency. 980 - UAH
    #[schema(example = 980)]
    pub currency_to: CurrencyCode,
}

/// Response carrying the resolved conversion.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConvertResponse {
    pub result: Conversion,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_request_decodes_camel_case() {
        let json = r#"{"amount":1000,"currencyFrom":840,"currencyTo":980}"#;
        let req: ConvertRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.amount, 1000.0);
        assert_eq!(req.currency_from, CurrencyCode(840));
        assert_eq!(req.currency_to, CurrencyCode(980));
    }
}
