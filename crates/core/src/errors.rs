//! Core error types for tickerdeck.
//!
//! Market data errors are wrapped as-is. The price path never surfaces an
//! error to callers (it degrades to `"N/A"`), so these mostly reach callers
//! of the search and selection APIs.

use thiserror::Error;

use tickerdeck_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the core crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Selection rejected: {0}")]
    Selection(#[from] SelectionError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// Reasons a selection event is not accepted into the active selection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("symbol must not be empty")]
    EmptySymbol,
}
