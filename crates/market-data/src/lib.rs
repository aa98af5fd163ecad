//! Tickerdeck Market Data Crate
//!
//! This crate provides the data-facing half of tickerdeck: the curated ticker
//! catalog, the remote search client with response validation, and price
//! extraction from quote documents whose shape varies per deployment.
//!
//! # Architecture
//!
//! ```text
//! +--------------------+      +-----------------------+
//! | LocalTickerCatalog |      | TickerSearchProvider  | --> validate_search_response
//! +--------------------+      +-----------------------+            |
//!                                                                  v
//!                                                       RemoteTickerRecord
//!
//! +----------------------+     +----------------+     +----------------+
//! | QuoteBackendProvider | --> |  QuotePayload  | --> | extract_price  | --> ExtractedPrice
//! +----------------------+     +----------------+     +----------------+
//! ```
//!
//! # Core Types
//!
//! - [`TickerMetadata`] - Catalog display metadata
//! - [`RemoteTickerRecord`] - A validated remote search hit
//! - [`QuotePayload`] - Opaque quote document
//! - [`ExtractedPrice`] - A rendered price or `"N/A"`
//! - [`CandidatePath`] - One ordered probe into a payload

pub mod catalog;
pub mod errors;
pub mod extract;
pub mod models;
pub mod provider;

pub use catalog::LocalTickerCatalog;
pub use errors::{FailureKind, MarketDataError};
pub use extract::{extract_ema, extract_price, CandidatePath, CLOSING_PRICE_PATHS, EMA_PATHS};
pub use models::{ExtractedPrice, QuotePayload, RemoteTickerRecord, TickerMetadata, NOT_AVAILABLE};
pub use provider::quote_backend::DEFAULT_BACKEND_URL;
pub use provider::ticker_search::DEFAULT_SEARCH_URL;
pub use provider::{
    validate_search_response, QuoteBackendProvider, QuoteSource, TickerSearchProvider,
    TickerSearchSource,
};
