//! # C-CEX API SDK
//!
//! An async Rust client for the C-CEX exchange HTTP API.
//!
//! ## Features
//!
//! - Ticker snapshots (`coinnames.json`, `prices.json`, per-pair and volume reports)
//! - Public market data: markets, order books, summaries, trade history
//! - Private account and trading calls, signed with HMAC-SHA512
//! - A single error type classifying every failure (configuration, transport,
//!   malformed response, maintenance, API rejection)
//! - Optional typed views over the documented payloads
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ccex_api_sdk::{CcexClient, ClientConfig, OrderbookType};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Public endpoints need no credentials
//!     let client = CcexClient::new(ClientConfig::default())?;
//!
//!     let ticker = client.tickers().pair_market_data("dash", "btc").await?;
//!     println!("DASH/BTC: {}", ticker);
//!
//!     let book = client
//!         .public()
//!         .get_orderbook("USD-BTC", OrderbookType::Both, None)
//!         .await?;
//!     println!("Order book: {}", book);
//!
//!     // Private endpoints need an API key and secret
//!     let client = CcexClient::new(ClientConfig::default().with_credentials("key", "secret"))?;
//!     let balances = client.private()?.get_balances().await?;
//!     println!("Balances: {}", balances);
//!
//!     Ok(())
//! }
//! ```

// Internal modules
mod client;
mod error;
mod private;
mod public;
mod request;
mod response;
mod signing;
mod tickers;
mod transport;
pub mod types;

// Re-export public API
pub use client::{CcexClient, ClientConfig, Credentials, DEFAULT_BASE_URL};
pub use error::{CcexError, ErrorKind, Result};
pub use private::Private;
pub use public::{OrderbookType, Public, DEFAULT_COUNT, DEFAULT_DEPTH};
pub use request::{
    build, normalize_param_name, CallDescriptor, CallStyle, ParamValue, Params, PreparedRequest,
};
pub use response::{extract, normalize, MAINTENANCE_MARKER};
pub use signing::{sign, SIGNATURE_HEADER};
pub use tickers::Tickers;
pub use transport::{HttpTransport, RawResponse, Transport, DEFAULT_USER_AGENT};

// Payloads are plain JSON trees
pub use serde_json::Value;
