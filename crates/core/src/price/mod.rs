//! Price synchronization for the active selection.
//!
//! - `metric` - What is fetched and how it is extracted (closing price or EMA)
//! - `fetcher` - Generation-fenced request/extract/display (PriceFetcher)
//! - `worker` - Background task re-triggering the fetcher on selection changes

mod fetcher;
mod metric;
mod worker;

pub use fetcher::{PriceDisplay, PriceFetcher};
pub use metric::{PriceMetric, DEFAULT_EMA_PERIOD};
pub use worker::{price_sync_worker, spawn_price_sync};
