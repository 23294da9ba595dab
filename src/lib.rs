// Library exports for the ticker dashboard
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod feedback;
pub mod search;
pub mod ticker;
pub mod toast;
pub mod ui;

// Re-export commonly used types
pub use app::{App, Focus};
pub use cli::Cli;
pub use config::Settings;
pub use error::{ConfigError, ContextError, FeedbackError};
pub use feedback::{FeedbackClient, FeedbackForm, FeedbackSubmission, FormStatus};
pub use search::TickerSearch;
pub use ticker::{SymbolCatalog, TickerContext, TickerPanel, TickerProvider};
pub use toast::{Toast, ToastKind, Toaster};
pub use ui::render_ui;
