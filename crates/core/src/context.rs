//! Wiring of the selection, search and price components.

use std::sync::Arc;

use tokio::task::JoinHandle;

use tickerdeck_market_data::{
    LocalTickerCatalog, QuoteBackendProvider, QuoteSource, TickerSearchProvider,
    TickerSearchSource,
};

use crate::config::Config;
use crate::events::EventSink;
use crate::logging;
use crate::price::{spawn_price_sync, PriceFetcher};
use crate::search::RemoteTickerSearch;
use crate::selection::{ActiveSelection, SelectionStore};
use crate::selector::TickerFilterSelector;

/// Owns the shared components of one ticker view.
///
/// The EMA fetcher is built but not started; callers opt in with
/// [`start_ema`](Self::start_ema). Workers started here end once the context
/// is dropped.
pub struct ServiceContext {
    config: Config,
    catalog: Arc<LocalTickerCatalog>,
    store: Arc<SelectionStore>,
    search: Arc<RemoteTickerSearch>,
    price_fetcher: Arc<PriceFetcher>,
    ema_fetcher: Arc<PriceFetcher>,
}

impl ServiceContext {
    /// Build with the reqwest-backed sources described by `config`.
    pub fn new(config: Config, sink: Arc<dyn EventSink>) -> Self {
        let quotes = Arc::new(QuoteBackendProvider::with_timeout(
            config.backend_url.clone(),
            config.request_timeout,
        ));
        let search = Arc::new(TickerSearchProvider::with_timeout(
            config.search_url.clone(),
            config.request_timeout,
        ));
        Self::with_sources(config, quotes, search, sink)
    }

    pub fn with_sources(
        config: Config,
        quotes: Arc<dyn QuoteSource>,
        search_source: Arc<dyn TickerSearchSource>,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        let catalog = Arc::new(LocalTickerCatalog::with_default_tickers());
        let store = Arc::new(SelectionStore::new(ActiveSelection::default(), sink.clone()));
        let search = Arc::new(RemoteTickerSearch::new(
            search_source,
            store.clone(),
            sink.clone(),
            config.search_debounce,
        ));
        let price_fetcher = Arc::new(PriceFetcher::closing_price(
            quotes.clone(),
            store.clone(),
            sink.clone(),
        ));
        let ema_fetcher = Arc::new(PriceFetcher::ema(
            quotes,
            store.clone(),
            sink,
            config.ema_period,
        ));

        Self {
            config,
            catalog,
            store,
            search,
            price_fetcher,
            ema_fetcher,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<LocalTickerCatalog> {
        &self.catalog
    }

    pub fn selection_store(&self) -> &Arc<SelectionStore> {
        &self.store
    }

    /// A fresh combo-box over the shared catalog.
    pub fn selector(&self) -> TickerFilterSelector {
        TickerFilterSelector::new(self.catalog.clone())
    }

    pub fn search(&self) -> &Arc<RemoteTickerSearch> {
        &self.search
    }

    pub fn price_fetcher(&self) -> &Arc<PriceFetcher> {
        &self.price_fetcher
    }

    pub fn ema_fetcher(&self) -> &Arc<PriceFetcher> {
        &self.ema_fetcher
    }

    /// Top bar text: the active selection's name.
    pub fn title(&self) -> String {
        self.store.get_active_selection().name().to_string()
    }

    /// Logo of the active selection: the catalog icon, else the configured CDN.
    pub fn icon_url(&self) -> String {
        let selection = self.store.get_active_selection();
        self.catalog
            .icon_url(selection.symbol(), &self.config.logo_cdn_template)
    }

    /// Install the global tracing subscriber in the configured format.
    ///
    /// Returns false if a subscriber was already installed.
    pub fn init_tracing(&self) -> bool {
        logging::init_tracing(self.config.log_format)
    }

    /// Start keeping the closing price in sync with the selection.
    pub fn start(&self) -> JoinHandle<()> {
        spawn_price_sync(&self.price_fetcher)
    }

    pub fn start_ema(&self) -> JoinHandle<()> {
        spawn_price_sync(&self.ema_fetcher)
    }
}
