//! Background task that keeps the displayed price in sync with the selection.
//!
//! Observes the selection store and starts an independent refresh for the
//! initial selection and for every generation change. Refreshes are not
//! cancelled; the fetcher's generation fence drops stale results.
//!
//! The worker only holds a weak reference to its fetcher, so dropping the
//! last owner of the fetcher (and of the selection store) ends the task.

use std::sync::{Arc, Weak};

use log::{debug, info};
use tokio::task::JoinHandle;

use super::PriceFetcher;

/// Runs until the fetcher or the selection store has no owner left.
pub async fn price_sync_worker(fetcher: Weak<PriceFetcher>) {
    let Some(mut selections) = fetcher.upgrade().map(|f| f.store().subscribe()) else {
        return;
    };
    let mut last_generation = None;

    loop {
        let generation = selections.borrow_and_update().generation;
        if last_generation != Some(generation) {
            let Some(fetcher) = fetcher.upgrade() else {
                info!("Price fetcher dropped, price sync worker shutting down");
                break;
            };
            last_generation = Some(generation);
            debug!(
                "Selection generation {} observed, refreshing {}",
                generation,
                fetcher.metric()
            );
            tokio::spawn(async move {
                fetcher.refresh().await;
            });
        }

        if selections.changed().await.is_err() {
            info!("Selection store closed, price sync worker shutting down");
            break;
        }
    }
}

/// Spawn [`price_sync_worker`] on the current runtime.
///
/// The handle does not keep `fetcher` alive.
pub fn spawn_price_sync(fetcher: &Arc<PriceFetcher>) -> JoinHandle<()> {
    tokio::spawn(price_sync_worker(Arc::downgrade(fetcher)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use async_trait::async_trait;
    use serde_json::json;
    use tickerdeck_market_data::{MarketDataError, QuotePayload, QuoteSource};

    use crate::events::MockEventSink;
    use crate::selection::SelectionStore;

    /// Echoes the symbol length as the price.
    struct EchoQuotes;

    #[async_trait]
    impl QuoteSource for EchoQuotes {
        fn id(&self) -> &'static str {
            "ECHO"
        }

        async fn get_quote(&self, symbol: &str) -> Result<QuotePayload, MarketDataError> {
            Ok(QuotePayload::new(json!({ "price": symbol.len() })))
        }

        async fn get_ema(&self, _symbol: &str, _period: u32) -> Result<QuotePayload, MarketDataError> {
            Ok(QuotePayload::new(json!({})))
        }
    }

    async fn wait_for_symbol(fetcher: &PriceFetcher, symbol: &str) {
        let mut display = fetcher.subscribe_display();
        tokio::time::timeout(
            Duration::from_secs(5),
            display.wait_for(|d| d.symbol == symbol && d.price.is_some()),
        )
        .await
        .expect("display should update")
        .expect("fetcher alive");
    }

    #[tokio::test]
    async fn test_fetches_initial_selection_and_changes() {
        let store = Arc::new(SelectionStore::default());
        let sink = MockEventSink::new();
        let fetcher = Arc::new(PriceFetcher::closing_price(
            Arc::new(EchoQuotes),
            store.clone(),
            Arc::new(sink.clone()),
        ));

        let worker = spawn_price_sync(&fetcher);
        wait_for_symbol(&fetcher, "AAPL").await;
        assert_eq!(fetcher.displayed().text(), "4");

        store.set_active_selection("Chipotle", "CMG").unwrap();
        wait_for_symbol(&fetcher, "CMG").await;
        assert_eq!(fetcher.displayed().text(), "3");

        worker.abort();
    }

    #[tokio::test]
    async fn test_name_only_change_does_not_refetch() {
        let store = Arc::new(SelectionStore::default());
        let sink = MockEventSink::new();
        let fetcher = Arc::new(PriceFetcher::closing_price(
            Arc::new(EchoQuotes),
            store.clone(),
            Arc::new(sink.clone()),
        ));

        let worker = spawn_price_sync(&fetcher);
        wait_for_symbol(&fetcher, "AAPL").await;
        store.set_active_selection("Apple", "AAPL").unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;

        let requests = sink
            .names()
            .iter()
            .filter(|name| **name == "price_requested")
            .count();
        assert_eq!(requests, 1);
        worker.abort();
    }

    #[tokio::test]
    async fn test_worker_finishes_when_owners_dropped() {
        let store = Arc::new(SelectionStore::default());
        let fetcher = Arc::new(PriceFetcher::closing_price(
            Arc::new(EchoQuotes),
            store.clone(),
            Arc::new(MockEventSink::new()),
        ));

        let worker = spawn_price_sync(&fetcher);
        wait_for_symbol(&fetcher, "AAPL").await;
        drop(fetcher);
        drop(store);

        let finished = tokio::time::timeout(Duration::from_secs(2), worker).await;
        assert!(matches!(finished, Ok(Ok(()))));
    }

    #[tokio::test]
    async fn test_worker_stops_on_next_change_after_fetcher_dropped() {
        let store = Arc::new(SelectionStore::default());
        let fetcher = Arc::new(PriceFetcher::closing_price(
            Arc::new(EchoQuotes),
            store.clone(),
            Arc::new(MockEventSink::new()),
        ));

        let worker = spawn_price_sync(&fetcher);
        wait_for_symbol(&fetcher, "AAPL").await;
        drop(fetcher);
        // let the initial refresh task release its strong reference
        tokio::time::sleep(Duration::from_millis(20)).await;
        store.set_active_selection("Nvidia", "NVDA").unwrap();

        let finished = tokio::time::timeout(Duration::from_secs(2), worker).await;
        assert!(matches!(finished, Ok(Ok(()))));
    }
}
