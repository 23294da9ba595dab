// Ticker selection: the shared store, the symbol catalog and the panel that reads it

pub mod catalog;
pub mod context;
pub mod panel;

pub use catalog::{validate_ticker, SymbolCatalog};
pub use context::{Subscription, TickerContext, TickerProvider};
pub use panel::{PanelSnapshot, TickerPanel};
