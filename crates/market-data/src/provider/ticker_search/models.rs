//! Remote ticker search response models.
//!
//! The search host answers with an array of hits, each wrapping the SEC
//! company-tickers record under an `Item` key:
//!
//! ```json
//! [{ "Item": { "cik_str": 320193, "ticker": "AAPL", "title": "Apple Inc." } }]
//! ```

use serde::Deserialize;
use serde_json::Number;

/// One element of the search response array
#[derive(Debug, Deserialize)]
pub(crate) struct SearchHit {
    #[serde(rename = "Item")]
    pub item: SearchItem,
}

/// The SEC company-tickers record
#[derive(Debug, Deserialize)]
pub(crate) struct SearchItem {
    pub cik_str: Number,
    pub ticker: String,
    pub title: String,
    // Note: score and other ranking fields may be present and are ignored
}
