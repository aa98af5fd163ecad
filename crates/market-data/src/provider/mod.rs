//! Remote data sources and their abstractions.
//!
//! This module contains:
//! - The [`QuoteSource`] and [`TickerSearchSource`] traits the core crate depends on
//! - [`QuoteBackendProvider`]: reqwest client for the quote backend (`/tickers`, `/ema`)
//! - [`TickerSearchProvider`]: reqwest client for the remote ticker search host
//!
//! # Failure Contract
//!
//! Quote sources answer a non-200 status with the sentinel payload instead of
//! an error, so the extractor can turn it into `"N/A"`. Search sources return
//! errors and leave it to the caller to keep its previous results.

mod traits;

pub mod quote_backend;
pub mod ticker_search;

// Re-exports
pub use quote_backend::QuoteBackendProvider;
pub use ticker_search::{validate_search_response, TickerSearchProvider};
pub use traits::{QuoteSource, TickerSearchSource};
