//! Tickerdeck Core
//!
//! Selection and price synchronization for a single ticker view.
//!
//! ```text
//! TickerFilterSelector --\
//!                         +--> SelectionStore --> price_sync_worker --> PriceFetcher --> PriceDisplay
//! RemoteTickerSearch ----/        (generation)                         (generation fence)
//! ```
//!
//! Both selection components write the [`SelectionStore`]; the price worker
//! observes it and refreshes on every symbol change. Failures degrade to
//! "nothing changed" (search) or `"N/A"` (price) and are reported through an
//! [`EventSink`](events::EventSink).

pub mod config;
pub mod context;
pub mod errors;
pub mod events;
pub mod logging;
pub mod price;
pub mod search;
pub mod selection;
pub mod selector;

pub use config::Config;
pub use context::ServiceContext;
pub use errors::{Error, Result, SelectionError};
pub use price::{PriceDisplay, PriceFetcher, PriceMetric};
pub use search::RemoteTickerSearch;
pub use selection::{ActiveSelection, SelectionStore, TaggedSelection};
pub use selector::{RowPointer, TickerFilterSelector};
