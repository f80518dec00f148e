//! Ticker endpoints: static `.json` resources without an envelope.

use serde_json::Value;

use crate::client::CcexClient;
use crate::error::Result;
use crate::request::CallDescriptor;
use crate::response::extract;

/// Call name sent with every ticker resource.
const TICKER_CALL: &str = "ticker";

/// Ticker endpoints
#[derive(Debug, Clone, Copy)]
pub struct Tickers<'a> {
    client: &'a CcexClient,
}

impl<'a> Tickers<'a> {
    pub(crate) fn new(client: &'a CcexClient) -> Self {
        Self { client }
    }

    async fn resource(&self, operation: &'static str, path: String) -> Result<Value> {
        self.client
            .execute(CallDescriptor::new(operation, TICKER_CALL, path))
            .await
    }

    /// Full names for all coin tickers, keyed by abbreviation (`coinnames.json`).
    pub async fn coin_names(&self) -> Result<Value> {
        self.resource("coin_names", "coinnames.json".to_string())
            .await
    }

    /// List of available trading pairs, e.g. `["usd-btc", "1337-btc"]`.
    ///
    /// Read from the `pairs` field of `coinnames.json`.
    pub async fn pairs(&self) -> Result<Value> {
        let data = self
            .resource("pairs", "coinnames.json".to_string())
            .await?;
        Ok(extract(data, "pairs"))
    }

    /// Market data for one trading pair (`{coin1}-{coin2}.json`), `ticker` field.
    pub async fn pair_market_data(&self, coin1: &str, coin2: &str) -> Result<Value> {
        let data = self
            .resource("pair_market_data", format!("{}-{}.json", coin1, coin2))
            .await?;
        Ok(extract(data, "ticker"))
    }

    /// Market data for every trading pair, keyed by pair name (`prices.json`).
    pub async fn all_pairs_market_data(&self) -> Result<Value> {
        self.resource("all_pairs_market_data", "prices.json".to_string())
            .await
    }

    /// 24 hour volume report for a coin market (`volume_{coin}.json`), `ticker` field.
    pub async fn volume_coin(&self, coin: &str) -> Result<Value> {
        let data = self
            .resource("volume_coin", format!("volume_{}.json", coin))
            .await?;
        Ok(extract(data, "ticker"))
    }
}
