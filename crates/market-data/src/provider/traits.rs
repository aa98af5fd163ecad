//! Data source trait definitions.
//!
//! The core crate only talks to these traits, so tests can substitute
//! in-memory sources with controllable timing.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::MarketDataError;
use crate::models::{QuotePayload, RemoteTickerRecord};

use super::ticker_search::validate_search_response;

/// A backend that serves quote documents per symbol.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Unique identifier for this source, used for logging.
    fn id(&self) -> &'static str;

    /// Fetch the quote document for `symbol`.
    ///
    /// A non-200 response is reported as `Ok(QuotePayload::sentinel())`.
    /// Only transport-level failures (connect, timeout, undecodable body) are
    /// returned as errors.
    async fn get_quote(&self, symbol: &str) -> Result<QuotePayload, MarketDataError>;

    /// Fetch the moving-average document for `symbol` over `period` bars.
    ///
    /// Same failure contract as [`get_quote`](Self::get_quote).
    async fn get_ema(&self, symbol: &str, period: u32) -> Result<QuotePayload, MarketDataError>;
}

/// A remote index that can be searched by free text.
#[async_trait]
pub trait TickerSearchSource: Send + Sync {
    /// Unique identifier for this source, used for logging.
    fn id(&self) -> &'static str;

    /// Issue the query and return the decoded, unvalidated response body.
    async fn search_raw(&self, query: &str) -> Result<Value, MarketDataError>;

    /// Issue the query and validate the response shape.
    ///
    /// Returns `MarketDataError::ValidationFailed` when the body does not match
    /// `[{ "Item": { "cik_str", "ticker", "title" } }]`.
    async fn search(&self, query: &str) -> Result<Vec<RemoteTickerRecord>, MarketDataError> {
        let raw = self.search_raw(query).await?;
        validate_search_response(&raw)
    }
}
