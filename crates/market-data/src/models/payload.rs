use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder rendered when no candidate path yields a usable value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Message carried by the sentinel payload substituted for failed transport.
pub const SENTINEL_MESSAGE: &str = "error";

/// An untyped quote document as returned by the backend.
///
/// The shape varies across deployments (bare `price`, `closingPrices[]`, or
/// either of those nested under `data` / `results`), so no schema is applied.
/// Extraction probes it structurally.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuotePayload(Value);

impl QuotePayload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The fixed `{ "message": "error" }` document used in place of a failed response.
    pub fn sentinel() -> Self {
        Self(serde_json::json!({ "message": SENTINEL_MESSAGE }))
    }

    pub fn is_sentinel(&self) -> bool {
        self.0 == Self::sentinel().0
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for QuotePayload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Displayable outcome of price extraction. Never absent.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExtractedPrice {
    /// A numeric value rendered as a string (e.g., "191.23").
    Value(String),
    /// No usable field was found; renders as `"N/A"`.
    NotAvailable,
}

impl ExtractedPrice {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Value(value) => value,
            Self::NotAvailable => NOT_AVAILABLE,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}

impl fmt::Display for ExtractedPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ExtractedPrice {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sentinel_payload() {
        let payload = QuotePayload::sentinel();
        assert_eq!(payload.as_value(), &json!({ "message": "error" }));
        assert!(payload.is_sentinel());
        assert!(!QuotePayload::new(json!({ "price": 1 })).is_sentinel());
    }

    #[test]
    fn test_extracted_price_display() {
        assert_eq!(ExtractedPrice::Value("191.23".to_string()).to_string(), "191.23");
        assert_eq!(ExtractedPrice::NotAvailable.to_string(), "N/A");
        assert_eq!(
            serde_json::to_value(ExtractedPrice::NotAvailable).unwrap(),
            json!("N/A")
        );
    }
}
