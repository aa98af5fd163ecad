//! Shape validation for remote search responses.
//!
//! A response is accepted only when every element matches the expected
//! shape. A single malformed element rejects the whole response so callers
//! never show a partially parsed list.

use serde::Deserialize;
use serde_json::Value;

use crate::errors::MarketDataError;
use crate::models::RemoteTickerRecord;

use super::models::SearchHit;

/// Validate a decoded search response and convert it to records.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tickerdeck_market_data::provider::validate_search_response;
///
/// let raw = json!([{ "Item": { "cik_str": 320193, "ticker": "AAPL", "title": "Apple Inc." } }]);
/// let records = validate_search_response(&raw).unwrap();
/// assert_eq!(records[0].symbol, "AAPL");
///
/// let garbled = json!([{ "Item": { "cik_str": 320193, "title": "Apple Inc." } }]);
/// assert!(validate_search_response(&garbled).is_err());
/// ```
pub fn validate_search_response(raw: &Value) -> Result<Vec<RemoteTickerRecord>, MarketDataError> {
    let hits = Vec::<SearchHit>::deserialize(raw).map_err(|e| {
        MarketDataError::ValidationFailed {
            message: format!("Unexpected search response shape: {}", e),
        }
    })?;

    Ok(hits
        .into_iter()
        .map(|hit| RemoteTickerRecord::new(hit.item.cik_str, hit.item.ticker, hit.item.title))
        .collect())
}
