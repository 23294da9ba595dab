//! Error types for the dashboard widgets.
//!
//! Each widget seam gets its own enum so callers can tell a user mistake
//! (an empty feedback message) from a transport failure or from a
//! programming error such as using the ticker store outside its provider.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised by the shared ticker selection store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    /// The handle is not attached to a live `TickerProvider`.
    #[error("ticker context used outside of a TickerProvider")]
    NotInitialized,

    /// The selected ticker must never be empty.
    #[error("ticker symbol must not be empty")]
    EmptySymbol,
}

/// Errors raised while submitting feedback.
#[derive(Error, Debug)]
pub enum FeedbackError {
    /// The trimmed message was empty; no request was sent.
    #[error("Please enter your feedback message")]
    EmptyMessage,

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server responded with {0}")]
    Status(StatusCode),
}

/// Errors raised while resolving startup settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid ticker symbol '{0}' (expected 1-5 uppercase letters)")]
    InvalidSymbol(String),

    #[error("symbol list is empty")]
    EmptyCatalog,
}
