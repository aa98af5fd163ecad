//! Shared container for the active selection.
//!
//! Exactly one write path exists: [`SelectionStore::set_active_selection`].
//! Every accepted write that changes the symbol bumps a generation counter.
//! Price requests carry the generation they were issued under and compare it
//! on completion, so a late response for an old symbol can be recognised and
//! dropped.

use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::watch;

use crate::errors::Result;
use crate::events::{EventSink, NoOpEventSink, PipelineEvent};

use super::ActiveSelection;

/// A selection together with the generation it was accepted under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaggedSelection {
    pub generation: u64,
    pub selection: ActiveSelection,
}

/// State container exposing get/set and change notification.
pub struct SelectionStore {
    sender: watch::Sender<TaggedSelection>,
    sink: Arc<dyn EventSink>,
}

impl SelectionStore {
    pub fn new(initial: ActiveSelection, sink: Arc<dyn EventSink>) -> Self {
        let (sender, _) = watch::channel(TaggedSelection {
            generation: 0,
            selection: initial,
        });
        Self { sender, sink }
    }

    pub fn get_active_selection(&self) -> ActiveSelection {
        self.sender.borrow().selection.clone()
    }

    pub fn current(&self) -> TaggedSelection {
        self.sender.borrow().clone()
    }

    pub fn generation(&self) -> u64 {
        self.sender.borrow().generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation() == generation
    }

    /// Accept a selection event.
    ///
    /// Re-selecting the same `{ name, symbol }` is a no-op. Changing only the
    /// name notifies subscribers without bumping the generation, since the
    /// price only depends on the symbol.
    pub fn set_active_selection(
        &self,
        name: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Result<TaggedSelection> {
        let selection = match ActiveSelection::new(name, symbol) {
            Ok(selection) => selection,
            Err(e) => {
                warn!("Rejected selection event: {}", e);
                self.sink.emit(PipelineEvent::SelectionRejected {
                    reason: e.to_string(),
                });
                return Err(e.into());
            }
        };

        let mut accepted = None;
        let changed = self.sender.send_if_modified(|current| {
            if current.selection == selection {
                accepted = Some(current.clone());
                return false;
            }
            if current.selection.symbol() != selection.symbol() {
                current.generation += 1;
            }
            current.selection = selection;
            accepted = Some(current.clone());
            true
        });

        let tagged = accepted.unwrap_or_else(|| self.current());
        if changed {
            debug!(
                "Active selection is now {} ({}) at generation {}",
                tagged.selection.symbol(),
                tagged.selection.name(),
                tagged.generation
            );
            self.sink.emit(PipelineEvent::SelectionChanged {
                generation: tagged.generation,
                name: tagged.selection.name().to_string(),
                symbol: tagged.selection.symbol().to_string(),
            });
        }
        Ok(tagged)
    }

    /// Receiver that observes every accepted change.
    pub fn subscribe(&self) -> watch::Receiver<TaggedSelection> {
        self.sender.subscribe()
    }
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new(ActiveSelection::default(), Arc::new(NoOpEventSink))
    }
}
