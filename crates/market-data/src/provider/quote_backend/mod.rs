//! Quote backend provider implementation.
//!
//! Talks to the project's own quote service:
//! - Latest quote via `GET {backend}/tickers/{symbol}`
//! - Moving average via `GET {backend}/ema/{symbol}?period={n}`
//!
//! The response documents have no fixed schema (see the `extract` module),
//! so they are passed through as opaque JSON.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::models::QuotePayload;
use crate::provider::QuoteSource;

/// Development address of the quote backend.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:4999";
const PROVIDER_ID: &str = "QUOTE_BACKEND";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// reqwest client for the quote backend.
pub struct QuoteBackendProvider {
    client: Client,
    base_url: String,
}

impl QuoteBackendProvider {
    /// Create a provider with the default request timeout.
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

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn quote_url(&self, symbol: &str) -> Result<String, MarketDataError> {
        let symbol = checked_symbol(symbol)?;
        Ok(format!("{}/tickers/{}", self.base_url, encode(symbol)))
    }

    fn ema_url(&self, symbol: &str, period: u32) -> Result<String, MarketDataError> {
        let symbol = checked_symbol(symbol)?;
        Ok(format!(
            "{}/ema/{}?period={}",
            self.base_url,
            encode(symbol),
            period
        ))
    }

    /// GET a document. Any status other than 200 becomes the sentinel payload.
    async fn fetch(&self, url: &str) -> Result<QuotePayload, MarketDataError> {
        debug!("Quote backend request: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MarketDataError::from_request(e, PROVIDER_ID))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(
                "Quote backend returned {} for {}, using sentinel payload",
                status, url
            );
            return Ok(QuotePayload::sentinel());
        }

        let text = response
            .text()
            .await
            .map_err(|e| MarketDataError::from_request(e, PROVIDER_ID))?;

        serde_json::from_str::<Value>(&text)
            .map(QuotePayload::new)
            .map_err(|e| MarketDataError::Decode {
                message: format!("Quote backend body is not JSON: {}", e),
            })
    }
}

fn checked_symbol(symbol: &str) -> Result<&str, MarketDataError> {
    let trimmed = symbol.trim();
    if trimmed.is_empty() {
        return Err(MarketDataError::InvalidSymbol(symbol.to_string()));
    }
    Ok(trimmed)
}

#[async_trait]
impl QuoteSource for QuoteBackendProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_quote(&self, symbol: &str) -> Result<QuotePayload, MarketDataError> {
        let url = self.quote_url(symbol)?;
        self.fetch(&url).await
    }

    async fn get_ema(&self, symbol: &str, period: u32) -> Result<QuotePayload, MarketDataError> {
        let url = self.ema_url(symbol, period)?;
        self.fetch(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_urls() {
        let provider = QuoteBackendProvider::new("http://localhost:4999/");
        assert_eq!(provider.base_url(), "http://localhost:4999");
        assert_eq!(
            provider.quote_url("AAPL").unwrap(),
            "http://localhost:4999/tickers/AAPL"
        );
        assert_eq!(
            provider.quote_url("BRK/B").unwrap(),
            "http://localhost:4999/tickers/BRK%2FB"
        );
        assert_eq!(
            provider.ema_url("NVDA", 50).unwrap(),
            "http://localhost:4999/ema/NVDA?period=50"
        );
    }

    #[test]
    fn test_empty_symbol_is_rejected() {
        let provider = QuoteBackendProvider::new(DEFAULT_BACKEND_URL);
        assert!(matches!(
            provider.quote_url("  "),
            Err(MarketDataError::InvalidSymbol(_))
        ));
    }

    #[tokio::test]
    async fn test_get_quote_passes_payload_through() {
        let server = MockServer::start().await;
        let body = json!({ "closingPrices": [{ "close": 191.23 }] });
        Mock::given(method("GET"))
            .and(path("/tickers/AAPL"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;

        let provider = QuoteBackendProvider::new(server.uri());
        let payload = provider.get_quote("AAPL").await.unwrap();
        assert_eq!(payload.as_value(), &body);
    }

    #[tokio::test]
    async fn test_non_200_becomes_sentinel() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tickers/ZZZZ"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let provider = QuoteBackendProvider::new(server.uri());
        let payload = provider.get_quote("ZZZZ").await.unwrap();
        assert!(payload.is_sentinel());
    }

    #[tokio::test]
    async fn test_get_ema_sends_period() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ema/NVDA"))
            .and(query_param("period", "20"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "emaValue": [{ "ema": 120.5 }] })),
            )
            .mount(&server)
            .await;

        let provider = QuoteBackendProvider::new(server.uri());
        let payload = provider.get_ema("NVDA", 20).await.unwrap();
        assert_eq!(payload.as_value()["emaValue"][0]["ema"], json!(120.5));
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tickers/AAPL"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let provider = QuoteBackendProvider::new(server.uri());
        let error = provider.get_quote("AAPL").await.unwrap_err();
        assert!(matches!(error, MarketDataError::Decode { .. }));
    }
}
