//! Public market-data endpoints (`api_pub.html`).

use std::fmt;

use serde_json::Value;

use crate::client::CcexClient;
use crate::error::Result;
use crate::request::{CallDescriptor, Params};

pub(crate) const PUBLIC_PATH: &str = "api_pub.html";

/// Default (and documented) order book depth. The exchange caps it at 100.
pub const DEFAULT_DEPTH: u32 = 50;

/// Default number of history entries. The exchange accepts 1-100.
pub const DEFAULT_COUNT: u32 = 50;

/// Which side of the order book to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderbookType {
    Buy,
    Sell,
    Both,
}

impl fmt::Display for OrderbookType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderbookType::Buy => write!(f, "buy"),
            OrderbookType::Sell => write!(f, "sell"),
            OrderbookType::Both => write!(f, "both"),
        }
    }
}

/// Public endpoints
#[derive(Debug, Clone, Copy)]
pub struct Public<'a> {
    client: &'a CcexClient,
}

impl<'a> Public<'a> {
    pub(crate) fn new(client: &'a CcexClient) -> Self {
        Self { client }
    }

    async fn call(
        &self,
        operation: &'static str,
        call: &'static str,
        params: Params,
    ) -> Result<Value> {
        self.client
            .execute(CallDescriptor::new(operation, call, PUBLIC_PATH).params(params))
            .await
    }

    /// Open and available trading markets with their metadata.
    pub async fn get_markets(&self) -> Result<Value> {
        self.call("get_markets", "getmarkets", Params::new()).await
    }

    /// Order book for `market` (e.g. `USD-BTC`), `depth` defaults to [`DEFAULT_DEPTH`].
    pub async fn get_orderbook(
        &self,
        market: &str,
        order_type: OrderbookType,
        depth: Option<u32>,
    ) -> Result<Value> {
        let params = Params::new()
            .with("market", market)
            .with("type_", order_type.to_string())
            .with("depth", depth.unwrap_or(DEFAULT_DEPTH));
        self.call("get_orderbook", "getorderbook", params).await
    }

    /// Order book for all markets.
    pub async fn get_full_orderbook(&self, depth: Option<u32>) -> Result<Value> {
        let params = Params::new().with("depth", depth.unwrap_or(DEFAULT_DEPTH));
        self.call("get_full_orderbook", "getfullorderbook", params)
            .await
    }

    /// Last 24 hour summary of all active markets.
    pub async fn get_market_summaries(&self) -> Result<Value> {
        self.call("get_market_summaries", "getmarketsummaries", Params::new())
            .await
    }

    /// Latest trades for `market`, `count` defaults to [`DEFAULT_COUNT`].
    pub async fn get_market_history(&self, market: &str, count: Option<u32>) -> Result<Value> {
        let params = Params::new()
            .with("market", market)
            .with("count", count.unwrap_or(DEFAULT_COUNT));
        self.call("get_market_history", "getmarkethistory", params)
            .await
    }

    /// Latest trades for all markets.
    pub async fn get_full_market_history(&self, count: Option<u32>) -> Result<Value> {
        let params = Params::new().with("count", count.unwrap_or(DEFAULT_COUNT));
        self.call("get_full_market_history", "getfullmarkethistory", params)
            .await
    }

    /// Exchange wallet balance distribution for one currency (e.g. `GRC`).
    pub async fn get_balance_distribution(&self, currency_name: &str) -> Result<Value> {
        let params = Params::new().with("currency_name", currency_name);
        self.call("get_balance_distribution", "getbalancedistribution", params)
            .await
    }
}
