//! Private account and trading endpoints (`api.html`).
//!
//! Every call here is signed. A [`Private`] handle only exists for a client that holds
//! credentials, see [`CcexClient::private`].

use serde_json::Value;

use crate::client::{CcexClient, Credentials};
use crate::error::Result;
use crate::request::{CallDescriptor, Params};
use crate::response::extract;

pub(crate) const PRIVATE_PATH: &str = "api.html";

/// Private endpoints
#[derive(Debug, Clone, Copy)]
pub struct Private<'a> {
    client: &'a CcexClient,
    credentials: &'a Credentials,
}

impl<'a> Private<'a> {
    pub(crate) fn new(client: &'a CcexClient, credentials: &'a Credentials) -> Self {
        Self {
            client,
            credentials,
        }
    }

    async fn call(
        &self,
        operation: &'static str,
        call: &'static str,
        params: Params,
    ) -> Result<Value> {
        let descriptor = CallDescriptor::new(operation, call, PRIVATE_PATH)
            .params(params)
            .authenticated();
        self.client
            .execute_with(descriptor, Some(self.credentials))
            .await
    }

    // =========================================================================
    // Trading
    // =========================================================================

    /// Place a buy limit order; returns the order `uuid`.
    pub async fn buy_limit(&self, market: &str, quantity: f64, rate: f64) -> Result<Value> {
        let params = Params::new()
            .with("market", market)
            .with("quantity", quantity)
            .with("rate", rate);
        let result = self.call("buy_limit", "buylimit", params).await?;
        Ok(extract(result, "uuid"))
    }

    /// Place a sell limit order; returns the order `uuid`.
    pub async fn sell_limit(&self, market: &str, quantity: f64, rate: f64) -> Result<Value> {
        let params = Params::new()
            .with("market", market)
            .with("quantity", quantity)
            .with("rate", rate);
        let result = self.call("sell_limit", "selllimit", params).await?;
        Ok(extract(result, "uuid"))
    }

    /// Cancel a buy or sell order.
    pub async fn cancel(&self, uuid: &str) -> Result<Value> {
        self.call("cancel", "cancel", Params::new().with("uuid", uuid))
            .await
    }

    // =========================================================================
    // Account
    // =========================================================================

    /// Balance for one currency (e.g. `BTC`).
    pub async fn get_balance(&self, currency: &str) -> Result<Value> {
        self.call("get_balance", "getbalance", Params::new().with("currency", currency))
            .await
    }

    /// All balances of the account.
    pub async fn get_balances(&self) -> Result<Value> {
        self.call("get_balances", "getbalances", Params::new())
            .await
    }

    /// A single order by uuid.
    pub async fn get_order(&self, uuid: &str) -> Result<Value> {
        self.call("get_order", "getorder", Params::new().with("uuid", uuid))
            .await
    }

    /// Currently open orders, optionally for one market only.
    pub async fn get_open_orders(&self, market: Option<&str>) -> Result<Value> {
        let params = Params::new().with_opt("market", market);
        self.call("get_open_orders", "getopenorders", params)
            .await
    }

    /// Order history, for all markets unless `market` is given.
    pub async fn get_order_history(
        &self,
        market: Option<&str>,
        count: Option<u32>,
    ) -> Result<Value> {
        let params = Params::new()
            .with_opt("market", market)
            .with_opt("count", count);
        self.call("get_order_history", "getorderhistory", params)
            .await
    }

    /// Detailed trading history for one market (e.g. `GRC-BTC`).
    pub async fn my_trades(&self, market_id: &str) -> Result<Value> {
        let params = Params::new().with("market_id", market_id);
        self.call("my_trades", "mytrades", params).await
    }
}
