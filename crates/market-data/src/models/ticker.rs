use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Display metadata for a symbol in the local catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerMetadata {
    /// Symbol/ticker (e.g., "AAPL")
    pub symbol: String,

    /// Human readable company name (e.g., "Apple")
    pub company_name: String,

    /// Direct URL of the logo, when the catalog carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl TickerMetadata {
    /// Create catalog metadata without an icon.
    pub fn new(symbol: impl Into<String>, company_name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            company_name: company_name.into(),
            icon_url: None,
        }
    }

    /// Set the direct icon URL.
    pub fn with_icon(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = Some(icon_url.into());
        self
    }

    /// Case-insensitive substring match against the symbol or the company name.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.symbol.to_lowercase().contains(needle)
            || self.company_name.to_lowercase().contains(needle)
    }
}

/// A search hit produced only after the remote response passed shape validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RemoteTickerRecord {
    /// SEC central index key, kept exactly as the search host sent it
    pub cik: Number,

    /// Symbol/ticker (e.g., "NVDA")
    pub symbol: String,

    /// Registrant title (e.g., "NVIDIA CORP")
    pub title: String,
}

impl RemoteTickerRecord {
    pub fn new(cik: impl Into<Number>, symbol: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            cik: cik.into(),
            symbol: symbol.into(),
            title: title.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_symbol_or_name() {
        let meta = TickerMetadata::new("NVDA", "Nvidia");
        assert!(meta.matches_lowercase("nvd"));
        assert!(meta.matches_lowercase("idia"));
        assert!(meta.matches_lowercase(""));
        assert!(!meta.matches_lowercase("apple"));
    }

    #[test]
    fn test_metadata_serializes_camel_case() {
        let meta = TickerMetadata::new("FLYY", "Spirit Aviation Holdings");
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["companyName"], "Spirit Aviation Holdings");
        assert!(json.get("iconUrl").is_none());
    }
}
