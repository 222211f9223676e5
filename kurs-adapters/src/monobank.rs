//! HTTP client implementation of the `RateProvider` port.
//!
//! Talks to a Monobank-style endpoint: a single GET that answers either
//! with a JSON array of rate entries or with a JSON object carrying an
//! `errorDescription` field.

use async_trait::async_trait;
use serde::Deserialize;

use kurs_types::{ProviderError, RateEntry, RateProvider, RateTable};

/// Rate provider client. One request per `fetch`, no retry.
#[derive(Clone)]
pub struct MonobankClient {
    http: reqwest::Client,
    url: String,
}

impl MonobankClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProviderResponse {
    Rates(Vec<RateEntry>),
    Error {
        #[serde(rename = "errorDescription")]
        error_description: String,
    },
}

fn validate(response: ProviderResponse) -> Result<RateTable, ProviderError> {
    match response {
        ProviderResponse::Error { error_description } => {
            Err(ProviderError::Upstream(error_description))
        }
        ProviderResponse::Rates(entries) if entries.is_empty() => Err(ProviderError::Empty),
        ProviderResponse::Rates(entries) => Ok(RateTable::new(entries)),
    }
}

#[async_trait]
impl RateProvider for MonobankClient {
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<RateTable, ProviderError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        // An error payload can arrive with a non-2xx status, so the body
        // is decoded before the status is considered.
        let payload: ProviderResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let table = validate(payload)?;
        tracing::debug!("Fetched {} rate entries", table.len());
        Ok(table)
    }
}
