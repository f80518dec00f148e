//! Typed views over C-CEX payloads.
//!
//! Endpoint methods return the decoded JSON tree as-is. These structs describe the
//! documented shapes and can be layered on top with `serde_json::from_value`.

use std::collections::HashMap;

use serde::Deserialize;

// =============================================================================
// Tickers
// =============================================================================

/// Market data for one pair, as returned by `pair_market_data`.
#[derive(Debug, Clone, Deserialize)]
pub struct PairTicker {
    pub high: f64,
    pub low: f64,
    pub avg: f64,
    pub lastbuy: f64,
    pub lastsell: f64,
    pub buy: f64,
    pub sell: f64,
    pub lastprice: f64,
    #[serde(default)]
    pub buysupport: Option<f64>,
    pub updated: u64,
}

/// One entry of a `volume_coin` report.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinVolume {
    pub last: f64,
    pub vol: f64,
}

/// `volume_coin` report, keyed by coin.
pub type VolumeReport = HashMap<String, CoinVolume>;

/// `all_pairs_market_data`, keyed by pair name. Not every field is filled for every pair.
pub type AllPairsMarketData = HashMap<String, PairTicker>;

// =============================================================================
// Public market data
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Market {
    pub market_currency: String,
    pub base_currency: String,
    pub market_currency_long: String,
    pub base_currency_long: String,
    pub min_trade_size: f64,
    pub market_name: String,
    pub is_active: bool,
    pub created: String,
}

/// Last 24 hour summary of a market
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarketSummary {
    pub market_name: String,
    pub high: f64,
    pub low: f64,
    pub volume: f64,
    pub last: f64,
    pub base_volume: f64,
    pub time_stamp: String,
    pub bid: f64,
    pub ask: f64,
    pub open_buy_orders: u64,
    pub open_sell_orders: u64,
    pub prev_day: f64,
    pub created: String,
    #[serde(default)]
    pub display_market_name: Option<String>,
}

/// A single order book level. `market` is only set by the full order book.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderbookEntry {
    #[serde(default)]
    pub market: Option<String>,
    pub quantity: f64,
    pub rate: f64,
}

/// Order book; a side is absent when it was not requested.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Orderbook {
    #[serde(default)]
    pub buy: Vec<OrderbookEntry>,
    #[serde(default)]
    pub sell: Vec<OrderbookEntry>,
}

/// A public trade from the market history
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarketTrade {
    #[serde(default)]
    pub market: Option<String>,
    pub id: u64,
    pub time_stamp: String,
    pub quantity: f64,
    pub price: f64,
    pub total: f64,
    pub fill_type: String,
    pub order_type: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BalanceDistribution {
    pub distribution: Vec<DistributionEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DistributionEntry {
    pub balance: f64,
}

// =============================================================================
// Account
// =============================================================================

/// Balance for a single currency
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Balance {
    pub currency: String,
    pub balance: f64,
    pub available: f64,
    pub pending: f64,
    #[serde(default)]
    pub crypto_address: Option<String>,
    #[serde(default)]
    pub requested: Option<bool>,
    #[serde(default)]
    pub uuid: Option<String>,
}

/// Full order details, as returned by `get_order`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    #[serde(default)]
    pub account_id: Option<String>,
    pub order_uuid: String,
    pub exchange: String,
    #[serde(rename = "Type")]
    pub order_type: String,
    pub quantity: f64,
    pub quantity_remaining: f64,
    pub limit: f64,
    pub reserved: f64,
    pub reserve_remaining: f64,
    pub commission_reserved: f64,
    pub commission_reserve_remaining: f64,
    pub commission_paid: f64,
    pub price: f64,
    #[serde(default)]
    pub price_per_unit: Option<f64>,
    pub opened: String,
    #[serde(default)]
    pub closed: Option<String>,
    pub is_open: bool,
    pub sentinel: String,
    pub cancel_initiated: bool,
    pub immediate_or_cancel: bool,
    pub is_conditional: bool,
    pub condition: String,
    #[serde(default)]
    pub condition_target: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OpenOrder {
    #[serde(default)]
    pub uuid: Option<String>,
    pub order_uuid: String,
    pub exchange: String,
    pub order_type: String,
    pub quantity: f64,
    pub quantity_remaining: f64,
    pub limit: f64,
    pub commission_paid: f64,
    pub price: f64,
    #[serde(default)]
    pub price_per_unit: Option<f64>,
    pub opened: String,
    #[serde(default)]
    pub closed: Option<String>,
    pub cancel_initiated: bool,
    pub immediate_or_cancel: bool,
    pub is_conditional: bool,
    pub condition: String,
    #[serde(default)]
    pub condition_target: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderHistoryEntry {
    pub order_uuid: String,
    pub exchange: String,
    pub time_stamp: String,
    pub order_type: String,
    pub limit: f64,
    pub quantity: f64,
    pub quantity_remaining: f64,
    pub commission: f64,
    pub price: f64,
    #[serde(default)]
    pub price_per_unit: Option<f64>,
    pub is_conditional: bool,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub condition_target: Option<f64>,
    pub immediate_or_cancel: bool,
}

/// One of your own fills, from `my_trades`. The exchange sends every value as a string.
#[derive(Debug, Clone, Deserialize)]
pub struct MyTrade {
    pub tradeid: String,
    pub tradetype: String,
    pub datetime: String,
    pub marketid: String,
    pub tradeprice: String,
    pub quantity: String,
    pub fee: String,
    pub total: String,
    pub initiate_ordertype: String,
    pub order_id: String,
}
