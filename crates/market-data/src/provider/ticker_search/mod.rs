//! Remote ticker search provider implementation.
//!
//! Queries `GET https://{search-host}/v2/search?q={query}` and validates the
//! response before turning it into [`RemoteTickerRecord`]s.
//!
//! [`RemoteTickerRecord`]: crate::models::RemoteTickerRecord

mod models;
mod validator;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::provider::TickerSearchSource;

pub use validator::validate_search_response;

/// Public search host.
pub const DEFAULT_SEARCH_URL: &str = "https://tickers.penylo.dev";
const PROVIDER_ID: &str = "TICKER_SEARCH";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// reqwest client for the remote ticker search host.
pub struct TickerSearchProvider {
    client: Client,
    base_url: String,
}

impl TickerSearchProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// The raw query is sent as typed, URL-escaped, with no length gate.
    fn search_url(&self, query: &str) -> String {
        format!("{}/v2/search?q={}", self.base_url, encode(query))
    }
}

impl Default for TickerSearchProvider {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_URL)
    }
}

#[async_trait]
impl TickerSearchSource for TickerSearchProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn search_raw(&self, query: &str) -> Result<Value, MarketDataError> {
        let url = self.search_url(query);
        debug!("Ticker search request: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| MarketDataError::from_request(e, PROVIDER_ID))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| MarketDataError::from_request(e, PROVIDER_ID))?;

        serde_json::from_str(&text).map_err(|e| MarketDataError::Decode {
            message: format!("Search body is not JSON: {}", e),
        })
    }
}
