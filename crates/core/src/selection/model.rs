use serde::Serialize;

use crate::errors::SelectionError;

pub const DEFAULT_SELECTION_NAME: &str = "Apple Inc.";
pub const DEFAULT_SELECTION_SYMBOL: &str = "AAPL";

/// The instrument currently shown. `symbol` is never empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActiveSelection {
    name: String,
    symbol: String,
}

impl ActiveSelection {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Result<Self, SelectionError> {
        let symbol = symbol.into().trim().to_string();
        if symbol.is_empty() {
            return Err(SelectionError::EmptySymbol);
        }
        Ok(Self {
            name: name.into(),
            symbol,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl Default for ActiveSelection {
    fn default() -> Self {
        Self {
            name: DEFAULT_SELECTION_NAME.to_string(),
            symbol: DEFAULT_SELECTION_SYMBOL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection() {
        let selection = ActiveSelection::default();
        assert_eq!(selection.name(), "Apple Inc.");
        assert_eq!(selection.symbol(), "AAPL");
    }

    #[test]
    fn test_empty_symbol_rejected() {
        assert_eq!(
            ActiveSelection::new("Nothing", ""),
            Err(SelectionError::EmptySymbol)
        );
        assert_eq!(
            ActiveSelection::new("Nothing", "   "),
            Err(SelectionError::EmptySymbol)
        );
    }

    #[test]
    fn test_symbol_is_trimmed() {
        let selection = ActiveSelection::new("Nvidia", " NVDA ").unwrap();
        assert_eq!(selection.symbol(), "NVDA");
    }
}
