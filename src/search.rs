//! Global ticker search box with an autocomplete panel

use cli_log::*;

use crate::error::ContextError;
use crate::ticker::{SymbolCatalog, TickerContext};

pub const SEARCH_PLACEHOLDER: &str = "Search ticker (e.g. AAPL)";

pub struct TickerSearch {
    catalog: SymbolCatalog,
    ctx: TickerContext,
    query_text: String,
    is_open: bool,
    suggestions: Vec<String>,
    highlighted: usize,
}

impl TickerSearch {
    pub fn new(catalog: SymbolCatalog, ctx: TickerContext) -> Self {
        Self {
            catalog,
            ctx,
            query_text: String::new(),
            is_open: false,
            suggestions: Vec::new(),
            highlighted: 0,
        }
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// The panel shows only while open and while something matches.
    pub fn panel_visible(&self) -> bool {
        self.is_open && !self.suggestions.is_empty()
    }

    pub fn focus(&mut self) {
        self.is_open = true;
    }

    pub fn blur(&mut self) {
        self.is_open = false;
    }

    /// Replace the whole query, as a text input change event would.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query_text = text.into();
        self.refresh_suggestions();
    }

    pub fn push_char(&mut self, ch: char) {
        self.query_text.push(ch);
        self.refresh_suggestions();
    }

    pub fn pop_char(&mut self) {
        self.query_text.pop();
        self.refresh_suggestions();
    }

    pub fn highlight_next(&mut self) {
        if !self.suggestions.is_empty() {
            self.highlighted = (self.highlighted + 1) % self.suggestions.len();
        }
    }

    pub fn highlight_previous(&mut self) {
        if !self.suggestions.is_empty() {
            self.highlighted = self
                .highlighted
                .checked_sub(1)
                .unwrap_or(self.suggestions.len() - 1);
        }
    }

    /// Write `symbol` into the shared selection and reset the box.
    pub fn select(&mut self, symbol: &str) -> Result<(), ContextError> {
        self.ctx.set(symbol)?;
        info!("Ticker selected from search: {symbol}");

        self.query_text.clear();
        self.is_open = false;
        self.refresh_suggestions();
        Ok(())
    }

    /// Select the highlighted suggestion; returns it if the panel was visible.
    pub fn select_highlighted(&mut self) -> Result<Option<String>, ContextError> {
        if !self.panel_visible() {
            return Ok(None);
        }

        let Some(symbol) = self.suggestions.get(self.highlighted).cloned() else {
            return Ok(None);
        };
        self.select(&symbol)?;
        Ok(Some(symbol))
    }

    fn refresh_suggestions(&mut self) {
        self.suggestions = self.catalog.filter(&self.query_text);
        self.highlighted = 0;
    }
}
