use clap::Parser;
use crate::config::{DEFAULT_API_KEY_ENV, DEFAULT_TICKER};

#[derive(Parser, Debug)]
#[command(name = "lukz-dashboard")]
#[command(about = "Terminal ticker dashboard with global search and feedback")]
pub struct Cli {
    /// Ticker selected at startup
    #[arg(short, long, default_value = DEFAULT_TICKER)]
    pub ticker: String,

    /// Comma separated symbols offered by the search box (e.g. "AAPL,MSFT,NVDA")
    #[arg(short, long)]
    pub symbols: Option<String>,

    /// Base URL of the feedback API (falls back to $API_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    /// API key environment variable name
    #[arg(long, default_value = DEFAULT_API_KEY_ENV)]
    pub api_key_env: String,
}
