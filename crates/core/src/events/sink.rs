//! Pipeline event sink trait and implementations.

use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, warn};

use super::PipelineEvent;

/// Trait for receiving pipeline events.
///
/// # Design Rules
///
/// - `emit()` must be fast and non-blocking (no network calls)
/// - Failure to emit must not affect the pipeline (best-effort)
pub trait EventSink: Send + Sync {
    /// Emit a single event.
    fn emit(&self, event: PipelineEvent);
}

/// No-op implementation for contexts that don't need events.
#[derive(Clone, Default)]
pub struct NoOpEventSink;

impl EventSink for NoOpEventSink {
    fn emit(&self, _event: PipelineEvent) {}
}

/// Forwards events to the `log` facade as JSON.
///
/// Degradations (transport, shape, extraction) are logged at `warn`,
/// everything else at `debug`.
#[derive(Clone, Default)]
pub struct LogEventSink;

impl EventSink for LogEventSink {
    fn emit(&self, event: PipelineEvent) {
        let payload = serde_json::to_string(&event).unwrap_or_else(|_| event.name().to_string());
        if event.failure_kind().is_some() {
            warn!(target: "tickerdeck::events", "{}", payload);
        } else {
            debug!(target: "tickerdeck::events", "{}", payload);
        }
    }
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockEventSink {
    events: Arc<Mutex<Vec<PipelineEvent>>>,
}

impl MockEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_events(&self) -> MutexGuard<'_, Vec<PipelineEvent>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<PipelineEvent> {
        self.lock_events().clone()
    }

    /// Returns the names of collected events, in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.lock_events().iter().map(PipelineEvent::name).collect()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.lock_events().clear();
    }

    pub fn len(&self) -> usize {
        self.lock_events().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_events().is_empty()
    }
}

impl EventSink for MockEventSink {
    fn emit(&self, event: PipelineEvent) {
        self.lock_events().push(event);
    }
}
