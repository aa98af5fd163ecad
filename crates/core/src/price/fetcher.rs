//! Generation-fenced price fetching.
//!
//! Every refresh records the selection generation it was issued under. When
//! the response arrives, it is applied only if the store is still at that
//! generation and the display has not already moved past it. Stale requests
//! are not cancelled; their results are simply dropped.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::Serialize;
use tokio::sync::watch;

use tickerdeck_market_data::{ExtractedPrice, QuotePayload, QuoteSource};

use crate::events::{EventSink, PipelineEvent};
use crate::selection::{SelectionStore, TaggedSelection};

use super::PriceMetric;

/// What the display shows for the active selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceDisplay {
    pub generation: u64,
    pub symbol: String,
    /// `None` until the first response for this generation is applied
    pub price: Option<ExtractedPrice>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl PriceDisplay {
    fn pending(tagged: &TaggedSelection) -> Self {
        Self {
            generation: tagged.generation,
            symbol: tagged.selection.symbol().to_string(),
            price: None,
            updated_at: None,
        }
    }

    /// Text for the price slot.
    pub fn text(&self) -> &str {
        self.price.as_ref().map(ExtractedPrice::as_str).unwrap_or("")
    }
}

pub struct PriceFetcher {
    source: Arc<dyn QuoteSource>,
    store: Arc<SelectionStore>,
    sink: Arc<dyn EventSink>,
    metric: PriceMetric,
    display: watch::Sender<PriceDisplay>,
}

impl PriceFetcher {
    pub fn new(
        source: Arc<dyn QuoteSource>,
        store: Arc<SelectionStore>,
        sink: Arc<dyn EventSink>,
        metric: PriceMetric,
    ) -> Self {
        let (display, _) = watch::channel(PriceDisplay::pending(&store.current()));
        Self {
            source,
            store,
            sink,
            metric,
            display,
        }
    }

    /// Fetcher for the closing price.
    pub fn closing_price(
        source: Arc<dyn QuoteSource>,
        store: Arc<SelectionStore>,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        Self::new(source, store, sink, PriceMetric::ClosingPrice)
    }

    /// Fetcher for the moving average over `period` bars.
    pub fn ema(
        source: Arc<dyn QuoteSource>,
        store: Arc<SelectionStore>,
        sink: Arc<dyn EventSink>,
        period: u32,
    ) -> Self {
        Self::new(source, store, sink, PriceMetric::Ema { period })
    }

    pub fn metric(&self) -> PriceMetric {
        self.metric
    }

    pub fn store(&self) -> &Arc<SelectionStore> {
        &self.store
    }

    /// Request and extract for `symbol`. Never fails: transport errors use
    /// the sentinel payload, which extracts to `"N/A"`.
    pub async fn fetch_price(&self, symbol: &str) -> ExtractedPrice {
        let payload = match self.metric.fetch(self.source.as_ref(), symbol).await {
            Ok(payload) => payload,
            Err(e) => {
                warn!(
                    "{} request to {} for {} failed: {}",
                    self.metric,
                    self.source.id(),
                    symbol,
                    e
                );
                self.sink.emit(PipelineEvent::QuoteTransportFailed {
                    symbol: symbol.to_string(),
                    message: e.to_string(),
                });
                QuotePayload::sentinel()
            }
        };

        let price = self.metric.extract(&payload);
        if !price.is_available() {
            debug!("No usable {} in payload for {}", self.metric, symbol);
            self.sink.emit(PipelineEvent::ExtractionMissed {
                symbol: symbol.to_string(),
                metric: self.metric.to_string(),
            });
        }
        price
    }

    /// Fetch for the current selection and apply the result to the display
    /// unless the selection changed meanwhile.
    ///
    /// Returns the applied price, or `None` when the response was stale.
    pub async fn refresh(&self) -> Option<ExtractedPrice> {
        let requested = self.store.current();
        let symbol = requested.selection.symbol().to_string();
        self.sink.emit(PipelineEvent::PriceRequested {
            generation: requested.generation,
            symbol: symbol.clone(),
            metric: self.metric.to_string(),
        });

        let price = self.fetch_price(&symbol).await;

        let applied = self.display.send_if_modified(|display| {
            if !self.store.is_current(requested.generation)
                || display.generation > requested.generation
            {
                return false;
            }
            *display = PriceDisplay {
                generation: requested.generation,
                symbol: symbol.clone(),
                price: Some(price.clone()),
                updated_at: Some(Utc::now()),
            };
            true
        });

        if !applied {
            let current_generation = self.store.generation();
            debug!(
                "Discarding {} for {} (generation {}, now {})",
                self.metric, symbol, requested.generation, current_generation
            );
            self.sink.emit(PipelineEvent::StalePriceDiscarded {
                generation: requested.generation,
                current_generation,
                symbol,
            });
            return None;
        }

        self.sink.emit(PipelineEvent::PriceResolved {
            generation: requested.generation,
            symbol,
            metric: self.metric.to_string(),
            price: price.to_string(),
        });
        Some(price)
    }

    /// The value currently displayed.
    pub fn displayed(&self) -> PriceDisplay {
        self.display.borrow().clone()
    }

    pub fn subscribe_display(&self) -> watch::Receiver<PriceDisplay> {
        self.display.subscribe()
    }
}
