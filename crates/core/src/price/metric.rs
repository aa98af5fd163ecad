use std::fmt;

use tickerdeck_market_data::{
    extract_ema, extract_price, ExtractedPrice, MarketDataError, QuotePayload, QuoteSource,
};

/// Default EMA look-back, in bars.
pub const DEFAULT_EMA_PERIOD: u32 = 50;

/// The value a fetcher tracks for the active symbol.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PriceMetric {
    /// Last closing price from `/tickers/{symbol}`.
    ClosingPrice,
    /// Latest EMA from `/ema/{symbol}?period={period}`.
    Ema { period: u32 },
}

impl PriceMetric {
    pub fn ema() -> Self {
        Self::Ema {
            period: DEFAULT_EMA_PERIOD,
        }
    }

    pub(crate) async fn fetch(
        &self,
        source: &dyn QuoteSource,
        symbol: &str,
    ) -> Result<QuotePayload, MarketDataError> {
        match self {
            Self::ClosingPrice => source.get_quote(symbol).await,
            Self::Ema { period } => source.get_ema(symbol, *period).await,
        }
    }

    pub fn extract(&self, payload: &QuotePayload) -> ExtractedPrice {
        match self {
            Self::ClosingPrice => extract_price(payload),
            Self::Ema { .. } => extract_ema(payload),
        }
    }
}

impl fmt::Display for PriceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClosingPrice => write!(f, "close"),
            Self::Ema { period } => write!(f, "ema({})", period),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display() {
        assert_eq!(PriceMetric::ClosingPrice.to_string(), "close");
        assert_eq!(PriceMetric::ema().to_string(), "ema(50)");
    }

    #[test]
    fn test_extract_dispatches_by_metric() {
        let payload = QuotePayload::new(json!({
            "price": 150,
            "emaValue": [{ "ema": 148.2 }]
        }));
        assert_eq!(PriceMetric::ClosingPrice.extract(&payload).as_str(), "150");
        assert_eq!(PriceMetric::ema().extract(&payload).as_str(), "148.2");
    }
}
