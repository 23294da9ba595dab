// Configuration constants and runtime settings for the dashboard

use anyhow::Result;
use std::env;
use cli_log::*;

use crate::cli::Cli;
use crate::error::ConfigError;
use crate::ticker::{validate_ticker, SymbolCatalog};

/// Ticker selection
pub const DEFAULT_TICKER: &str = "AAPL";
pub const COMMON_TICKERS: [&str; 10] = [
    "AAPL", "TSLA", "GOOGL", "MSFT", "AMZN", "META", "NVDA", "AMD", "INTC", "JPM",
];
pub const MAX_TICKER_LEN: usize = 5;

/// Feedback API
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_API_URL_ENV: &str = "API_URL";
pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";
pub const FEEDBACK_PATH: &str = "/api/feedback";
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Update intervals (in milliseconds)
pub const TICK_RATE_MS: u64 = 50;
pub const UI_UPDATE_RATE_MS: u64 = 1000;

/// Notifications
pub const TOAST_DURATION_MS: u128 = 4000;
pub const MAX_TOASTS: usize = 3;

/// Settings resolved once at startup from CLI flags and the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub api_key: String,
    pub default_ticker: String,
    pub catalog: SymbolCatalog,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let api_url = cli
            .api_url
            .clone()
            .or_else(|| env::var(DEFAULT_API_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        // A missing key is the backend's problem, not ours
        let api_key = env::var(&cli.api_key_env).unwrap_or_else(|_| {
            warn!("Environment variable '{}' not set, sending an empty API key", cli.api_key_env);
            String::new()
        });

        let catalog = match cli.symbols.as_deref() {
            Some(list) => SymbolCatalog::parse_list(list)?,
            None => SymbolCatalog::common(),
        };

        if !validate_ticker(&cli.ticker) {
            return Err(ConfigError::InvalidSymbol(cli.ticker.clone()).into());
        }

        let settings = Self {
            api_url: normalize_base_url(&api_url),
            api_key,
            default_ticker: cli.ticker.clone(),
            catalog,
        };
        info!(
            "Resolved settings: api_url={}, default_ticker={}, catalog={} symbols",
            settings.api_url,
            settings.default_ticker,
            settings.catalog.len()
        );
        Ok(settings)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.strip_suffix('/').unwrap_or(url).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn trailing_slash_is_trimmed_once() {
        assert_eq!(normalize_base_url("http://api.test/"), "http://api.test");
        assert_eq!(normalize_base_url("http://api.test"), "http://api.test");
    }

    #[test]
    fn explicit_flags_win() {
        let cli = Cli::parse_from([
            "lukz-dashboard",
            "--api-url",
            "http://example.test/",
            "--api-key-env",
            "LUKZ_TEST_KEY_THAT_IS_NOT_SET",
            "--ticker",
            "MSFT",
            "--symbols",
            "MSFT,NVDA",
        ]);
        let settings = Settings::from_cli(&cli).unwrap();
        assert_eq!(settings.api_url, "http://example.test");
        assert_eq!(settings.api_key, "");
        assert_eq!(settings.default_ticker, "MSFT");
        assert_eq!(settings.catalog.symbols(), ["MSFT", "NVDA"]);
    }

    #[test]
    fn invalid_default_ticker_is_rejected() {
        let cli = Cli::parse_from(["lukz-dashboard", "--ticker", "aapl"]);
        let err = Settings::from_cli(&cli).unwrap_err();
        assert!(err.to_string().contains("aapl"));
    }
}
