//! Curated local ticker catalog.
//!
//! The default list is loaded from `tickers.json` at compile time via
//! `include_str!` and parsed once via `lazy_static`. A catalog is immutable
//! after construction; lookups and filters are deterministic.

use std::collections::HashMap;

use lazy_static::lazy_static;
use log::debug;
use serde::Deserialize;

use crate::models::TickerMetadata;

/// Placeholder substituted with the symbol in logo CDN templates.
pub const SYMBOL_PLACEHOLDER: &str = "{symbol}";

#[derive(Debug, Deserialize)]
struct CatalogFile {
    tickers: Vec<TickerMetadata>,
}

lazy_static! {
    static ref DEFAULT_CATALOG: LocalTickerCatalog = LocalTickerCatalog::load_default();
}

/// Static mapping from symbol to display metadata.
///
/// Symbols are unique; insertion order is preserved so filtered rows come out
/// in the order the catalog lists them.
#[derive(Clone, Debug, Default)]
pub struct LocalTickerCatalog {
    entries: Vec<TickerMetadata>,
    by_symbol: HashMap<String, usize>,
}

impl LocalTickerCatalog {
    /// Build a catalog from entries. Later duplicates of a symbol are ignored.
    pub fn from_entries(entries: impl IntoIterator<Item = TickerMetadata>) -> Self {
        let mut catalog = Self::default();
        for entry in entries {
            if catalog.by_symbol.contains_key(&entry.symbol) {
                debug!("Ignoring duplicate catalog symbol {}", entry.symbol);
                continue;
            }
            catalog
                .by_symbol
                .insert(entry.symbol.clone(), catalog.entries.len());
            catalog.entries.push(entry);
        }
        catalog
    }

    /// The curated list of popular tickers, shared for the process lifetime.
    pub fn global() -> &'static LocalTickerCatalog {
        &DEFAULT_CATALOG
    }

    /// An owned copy of the curated list.
    pub fn with_default_tickers() -> Self {
        Self::global().clone()
    }

    fn load_default() -> Self {
        let json = include_str!("tickers.json");
        let file: CatalogFile =
            serde_json::from_str(json).expect("tickers.json must be valid");
        Self::from_entries(file.tickers)
    }

    /// Exact symbol lookup.
    pub fn lookup(&self, symbol: &str) -> Option<&TickerMetadata> {
        self.by_symbol.get(symbol).map(|&idx| &self.entries[idx])
    }

    /// Rows whose symbol or company name contains `query`, ignoring case.
    ///
    /// An empty query matches every entry.
    pub fn filter(&self, query: &str) -> Vec<&TickerMetadata> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.matches_lowercase(&needle))
            .collect()
    }

    /// Icon for a symbol: the entry's own URL, else the CDN template with the
    /// symbol substituted.
    pub fn icon_url(&self, symbol: &str, cdn_template: &str) -> String {
        self.lookup(symbol)
            .and_then(|entry| entry.icon_url.clone())
            .unwrap_or_else(|| cdn_template.replace(SYMBOL_PLACEHOLDER, symbol))
    }

    pub fn entries(&self) -> &[TickerMetadata] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CDN: &str = "https://assets.fey.com/logos/{symbol}.svg";

    #[test]
    fn test_default_catalog_loads() {
        let catalog = LocalTickerCatalog::global();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.lookup("AAPL").unwrap().company_name, "Apple");
        assert!(catalog.lookup("FLYY").unwrap().icon_url.is_none());
        assert!(catalog.lookup("aapl").is_none());
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let catalog = LocalTickerCatalog::global();
        assert_eq!(catalog.filter("").len(), catalog.len());
    }

    #[test]
    fn test_filter_matches_symbol_case_insensitive() {
        let catalog = LocalTickerCatalog::global();
        let rows = catalog.filter("goo");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].symbol, "GOOG");
    }

    #[test]
    fn test_filter_matches_company_name() {
        let catalog = LocalTickerCatalog::global();
        let symbols: Vec<&str> = catalog
            .filter("AVIATION")
            .iter()
            .map(|row| row.symbol.as_str())
            .collect();
        assert_eq!(symbols, vec!["FLYY"]);
    }

    #[test]
    fn test_filter_preserves_catalog_order() {
        let catalog = LocalTickerCatalog::global();
        // "a" hits Apple, Nvidia, Alphabet, Spirit Aviation
        let symbols: Vec<&str> = catalog.filter("a").iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "NVDA", "GOOG", "FLYY"]);
    }

    #[test]
    fn test_filter_no_match() {
        assert!(LocalTickerCatalog::global().filter("zzz").is_empty());
    }

    #[test]
    fn test_duplicate_symbols_keep_first() {
        let catalog = LocalTickerCatalog::from_entries(vec![
            TickerMetadata::new("AAPL", "Apple"),
            TickerMetadata::new("AAPL", "Apple Again"),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup("AAPL").unwrap().company_name, "Apple");
    }

    #[test]
    fn test_icon_url_prefers_entry_then_cdn() {
        let catalog = LocalTickerCatalog::global();
        assert_eq!(
            catalog.icon_url("NVDA", CDN),
            "https://assets.fey.com/logos/NVDA_XNAS.svg"
        );
        assert_eq!(
            catalog.icon_url("FLYY", CDN),
            "https://assets.fey.com/logos/FLYY.svg"
        );
        assert_eq!(
            catalog.icon_url("MSFT", CDN),
            "https://assets.fey.com/logos/MSFT.svg"
        );
    }

    fn arb_entries() -> impl Strategy<Value = Vec<TickerMetadata>> {
        prop::collection::vec(("[A-Z]{1,5}", "[A-Za-z ]{0,12}"), 0..12).prop_map(|rows| {
            rows.into_iter()
                .map(|(symbol, name)| TickerMetadata::new(symbol, name))
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_filter_is_exact_substring_selection(
            entries in arb_entries(),
            query in "[A-Za-z ]{0,3}"
        ) {
            let catalog = LocalTickerCatalog::from_entries(entries);
            let needle = query.to_lowercase();
            let expected: Vec<&str> = catalog
                .entries()
                .iter()
                .filter(|e| {
                    e.symbol.to_lowercase().contains(&needle)
                        || e.company_name.to_lowercase().contains(&needle)
                })
                .map(|e| e.symbol.as_str())
                .collect();
            let actual: Vec<&str> = catalog
                .filter(&query)
                .iter()
                .map(|e| e.symbol.as_str())
                .collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
