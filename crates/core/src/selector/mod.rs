//! Combo-box selector over the local ticker catalog.
//!
//! The selector tracks the typed query and whether the drop-down is open.
//! Rows are recomputed from the catalog on every read.
//!
//! Row selection commits on pointer *down*. In a browser the input's blur
//! (which closes the drop-down) fires between a row's press and release, so a
//! release-driven commit would land on a row that is no longer displayed.

use std::sync::Arc;

use log::debug;

use tickerdeck_market_data::{LocalTickerCatalog, TickerMetadata};

use crate::errors::Result;
use crate::selection::{ActiveSelection, SelectionStore};

/// Pointer phase delivered to a drop-down row.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RowPointer {
    Down,
    Up,
}

#[derive(Clone, Debug)]
pub struct TickerFilterSelector {
    catalog: Arc<LocalTickerCatalog>,
    query_text: String,
    is_open: bool,
}

impl TickerFilterSelector {
    pub fn new(catalog: Arc<LocalTickerCatalog>) -> Self {
        Self {
            catalog,
            query_text: String::new(),
            is_open: false,
        }
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn focus(&mut self) {
        self.is_open = true;
    }

    pub fn blur(&mut self) {
        self.is_open = false;
    }

    /// Keystroke: replace the query with the input's current text.
    pub fn input(&mut self, text: impl Into<String>) {
        self.query_text = text.into();
    }

    /// Catalog rows matching the current query, open or not.
    pub fn rows(&self) -> Vec<&TickerMetadata> {
        self.catalog.filter(&self.query_text)
    }

    /// Rows as displayed: empty while the drop-down is closed.
    pub fn visible_rows(&self) -> Vec<&TickerMetadata> {
        if self.is_open {
            self.rows()
        } else {
            Vec::new()
        }
    }

    /// Deliver a pointer event to the row for `symbol`.
    ///
    /// Only `Down` on a currently visible row commits. Returns the new
    /// selection when one was committed.
    pub fn pointer(
        &self,
        symbol: &str,
        pointer: RowPointer,
        store: &SelectionStore,
    ) -> Result<Option<ActiveSelection>> {
        if pointer != RowPointer::Down {
            return Ok(None);
        }
        let Some(row) = self
            .visible_rows()
            .into_iter()
            .find(|row| row.symbol == symbol)
        else {
            debug!("Ignoring press on {} which is not displayed", symbol);
            return Ok(None);
        };

        let tagged = store.set_active_selection(row.company_name.clone(), row.symbol.clone())?;
        Ok(Some(tagged.selection))
    }

    /// Shorthand for a press-down on a row.
    pub fn select(&self, symbol: &str, store: &SelectionStore) -> Result<Option<ActiveSelection>> {
        self.pointer(symbol, RowPointer::Down, store)
    }

    /// Input placeholder: the catalog name of the active symbol, else the
    /// selection's own name.
    pub fn placeholder(&self, selection: &ActiveSelection) -> String {
        self.catalog
            .lookup(selection.symbol())
            .map(|entry| entry.company_name.clone())
            .unwrap_or_else(|| selection.name().to_string())
    }

    pub fn icon_url(&self, selection: &ActiveSelection, cdn_template: &str) -> String {
        self.catalog.icon_url(selection.symbol(), cdn_template)
    }
}
