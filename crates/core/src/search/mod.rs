//! Remote ticker search session.
//!
//! Each keystroke bumps a generation and schedules a debounced request.
//! Newer input aborts the previous task, cancelling its in-flight request.
//! A response is applied only if its generation is still the latest, and
//! only after it passed shape validation; anything else keeps the previously
//! displayed list.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use log::{debug, warn};
use tokio::task::JoinHandle;

use tickerdeck_market_data::{FailureKind, MarketDataError, RemoteTickerRecord, TickerSearchSource};

use crate::errors::Result;
use crate::events::{EventSink, PipelineEvent};
use crate::selection::{ActiveSelection, SelectionStore};

/// Default keystroke coalescing window.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(200);

#[derive(Default)]
struct SearchState {
    generation: u64,
    query: String,
    results: Vec<RemoteTickerRecord>,
    in_flight: Option<JoinHandle<()>>,
}

pub struct RemoteTickerSearch {
    source: Arc<dyn TickerSearchSource>,
    store: Arc<SelectionStore>,
    sink: Arc<dyn EventSink>,
    debounce: Duration,
    state: Mutex<SearchState>,
}

impl RemoteTickerSearch {
    pub fn new(
        source: Arc<dyn TickerSearchSource>,
        store: Arc<SelectionStore>,
        sink: Arc<dyn EventSink>,
        debounce: Duration,
    ) -> Self {
        Self {
            source,
            store,
            sink,
            debounce,
            state: Mutex::new(SearchState::default()),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, SearchState> {
        self.state.lock().unwrap_or_else(|poisoned| {
            warn!("Search state mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// One-shot query: request and validate, without touching session state.
    pub async fn search(&self, query: &str) -> Result<Vec<RemoteTickerRecord>> {
        Ok(self.source.search(query).await?)
    }

    /// Input changed. Must be called from within a tokio runtime.
    ///
    /// Returns the generation assigned to this input.
    pub fn input(self: &Arc<Self>, query: impl Into<String>) -> u64 {
        let query = query.into();
        let mut state = self.lock_state();
        state.generation += 1;
        let generation = state.generation;
        state.query = query.clone();

        if let Some(previous) = state.in_flight.take() {
            if !previous.is_finished() {
                previous.abort();
                self.sink.emit(PipelineEvent::SearchSuperseded {
                    generation: generation - 1,
                });
            }
        }

        let this = Arc::clone(self);
        state.in_flight = Some(tokio::spawn(async move {
            this.run(generation, query).await;
        }));
        generation
    }

    async fn run(&self, generation: u64, query: String) {
        if !self.debounce.is_zero() {
            tokio::time::sleep(self.debounce).await;
        }
        if !self.is_latest(generation) {
            return;
        }

        self.sink.emit(PipelineEvent::SearchIssued {
            generation,
            query: query.clone(),
        });
        match self.source.search(&query).await {
            Ok(records) => self.accept(generation, &query, records),
            Err(e) => self.reject(generation, &query, e),
        }
    }

    fn is_latest(&self, generation: u64) -> bool {
        self.lock_state().generation == generation
    }

    fn accept(&self, generation: u64, query: &str, records: Vec<RemoteTickerRecord>) {
        let count = records.len();
        {
            let mut state = self.lock_state();
            if state.generation != generation {
                debug!("Dropping search results for superseded query {:?}", query);
                return;
            }
            state.results = records;
        }
        self.sink.emit(PipelineEvent::SearchResultsAccepted {
            generation,
            query: query.to_string(),
            count,
        });
    }

    fn reject(&self, generation: u64, query: &str, error: MarketDataError) {
        let kind = error.failure_kind();
        match kind {
            FailureKind::ShapeValidation => {
                warn!("Search response for {:?} failed validation: {}", query, error)
            }
            _ => debug!("Search for {:?} failed: {}", query, error),
        }
        self.sink.emit(PipelineEvent::SearchFailed {
            generation,
            query: query.to_string(),
            kind,
            message: error.to_string(),
        });
    }

    /// Wait for the most recent input to finish (or be cancelled).
    pub async fn settle(&self) {
        let handle = self.lock_state().in_flight.take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }

    /// The currently displayed results.
    pub fn results(&self) -> Vec<RemoteTickerRecord> {
        self.lock_state().results.clone()
    }

    pub fn query(&self) -> String {
        self.lock_state().query.clone()
    }

    /// Select a displayed result: `{ name: title, symbol: ticker }`.
    ///
    /// Returns `None` when `index` is out of range.
    pub fn select(&self, index: usize) -> Result<Option<ActiveSelection>> {
        let Some(record) = self.lock_state().results.get(index).cloned() else {
            return Ok(None);
        };
        let tagged = self.store.set_active_selection(record.title, record.symbol)?;
        Ok(Some(tagged.selection))
    }
}
