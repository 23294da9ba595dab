//! Static list of symbols the search box can suggest

use crate::config::{COMMON_TICKERS, MAX_TICKER_LEN};
use crate::error::ConfigError;

/// Ordered, immutable set of ticker symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolCatalog {
    symbols: Vec<String>,
}

impl Default for SymbolCatalog {
    fn default() -> Self {
        Self::common()
    }
}

impl SymbolCatalog {
    /// The built-in list of widely traded tickers.
    pub fn common() -> Self {
        Self {
            symbols: COMMON_TICKERS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Build a catalog from explicit symbols, validating each one.
    pub fn from_symbols<I, S>(symbols: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for symbol in symbols {
            let symbol = symbol.into();
            if !validate_ticker(&symbol) {
                return Err(ConfigError::InvalidSymbol(symbol));
            }
            if !out.contains(&symbol) {
                out.push(symbol);
            }
        }

        if out.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        Ok(Self { symbols: out })
    }

    /// Parse a comma separated list such as `"AAPL, msft ,NVDA"`.
    ///
    /// Entries are trimmed and uppercased before validation.
    pub fn parse_list(list: &str) -> Result<Self, ConfigError> {
        Self::from_symbols(
            list.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_uppercase),
        )
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols containing `query` case-insensitively, in catalog order.
    ///
    /// An empty query matches nothing.
    pub fn filter(&self, query: &str) -> Vec<String> {
        if query.is_empty() {
            return Vec::new();
        }

        let query = query.to_lowercase();
        self.symbols
            .iter()
            .filter(|symbol| symbol.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}

/// 1 to 5 ASCII uppercase letters.
pub fn validate_ticker(ticker: &str) -> bool {
    (1..=MAX_TICKER_LEN).contains(&ticker.len())
        && ticker.chars().all(|c| c.is_ascii_uppercase())
}
