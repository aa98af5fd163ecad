//! Error types and failure classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The main error enum for all market data operations
//! - [`FailureKind`]: Classification into the transport / shape / extraction taxonomy

mod failure;

pub use failure::FailureKind;

use thiserror::Error;

/// Errors that can occur while talking to the quote backend or the search host.
///
/// Each variant is classified into a [`FailureKind`] via the
/// [`failure_kind`](Self::failure_kind) method. Callers in the core crate use the
/// classification to decide whether to degrade to a sentinel payload or to keep
/// the previously displayed state.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// A network error occurred while communicating with a remote service.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request timed out before a response arrived.
    #[error("Timeout: {source_id}")]
    Timeout {
        /// The remote source that timed out
        source_id: String,
    },

    /// The remote service answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    HttpStatus {
        /// Numeric HTTP status code
        status: u16,
        /// The requested URL
        url: String,
    },

    /// The response body was not valid JSON.
    #[error("Failed to decode response: {message}")]
    Decode {
        /// Description of the decode failure
        message: String,
    },

    /// The response was valid JSON but did not match the expected shape.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// A symbol was empty or otherwise unusable in a request path.
    #[error("Invalid symbol: {0:?}")]
    InvalidSymbol(String),
}

impl MarketDataError {
    /// Returns the failure classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use tickerdeck_market_data::errors::{FailureKind, MarketDataError};
    ///
    /// let error = MarketDataError::Timeout { source_id: "QUOTE_BACKEND".to_string() };
    /// assert_eq!(error.failure_kind(), FailureKind::Transport);
    ///
    /// let error = MarketDataError::ValidationFailed { message: "missing ticker".to_string() };
    /// assert_eq!(error.failure_kind(), FailureKind::ShapeValidation);
    /// ```
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Self::Network(_)
            | Self::Timeout { .. }
            | Self::HttpStatus { .. }
            | Self::Decode { .. }
            | Self::InvalidSymbol(_) => FailureKind::Transport,

            Self::ValidationFailed { .. } => FailureKind::ShapeValidation,
        }
    }

    pub(crate) fn from_request(error: reqwest::Error, source_id: &str) -> Self {
        if error.is_timeout() {
            Self::Timeout {
                source_id: source_id.to_string(),
            }
        } else {
            Self::Network(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_is_transport() {
        let error = MarketDataError::Timeout {
            source_id: "QUOTE_BACKEND".to_string(),
        };
        assert_eq!(error.failure_kind(), FailureKind::Transport);
    }

    #[test]
    fn test_http_status_is_transport() {
        let error = MarketDataError::HttpStatus {
            status: 503,
            url: "https://tickers.example/v2/search?q=a".to_string(),
        };
        assert_eq!(error.failure_kind(), FailureKind::Transport);
    }

    #[test]
    fn test_decode_is_transport() {
        let error = MarketDataError::Decode {
            message: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(error.failure_kind(), FailureKind::Transport);
    }

    #[test]
    fn test_validation_failed_is_shape_validation() {
        let error = MarketDataError::ValidationFailed {
            message: "[0].Item.ticker: missing field".to_string(),
        };
        assert_eq!(error.failure_kind(), FailureKind::ShapeValidation);
    }

    #[test]
    fn test_error_display() {
        let error = MarketDataError::HttpStatus {
            status: 404,
            url: "http://localhost:4999/tickers/ZZZZ".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "HTTP 404 from http://localhost:4999/tickers/ZZZZ"
        );

        let error = MarketDataError::InvalidSymbol(String::new());
        assert_eq!(format!("{}", error), "Invalid symbol: \"\"");
    }
}
