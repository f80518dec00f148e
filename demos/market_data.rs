//! Market data example for the C-CEX SDK.
//!
//! This example shows how to:
//! 1. Read ticker snapshots
//! 2. Query public markets and summaries
//! 3. Fetch an order book and decode it into a typed view

use ccex_api_sdk::types::{MarketSummary, Orderbook, PairTicker};
use ccex_api_sdk::{CcexClient, ClientConfig, OrderbookType};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("=== C-CEX Market Data Example ===\n");

    // Set CCEX_API_URL to point at another host
    let client = CcexClient::new(ClientConfig::from_env()?)?;

    // === Step 1: Tickers ===
    println!("1. Fetching DASH/BTC ticker...");
    let ticker = client.tickers().pair_market_data("dash", "btc").await?;
    match serde_json::from_value::<PairTicker>(ticker) {
        Ok(ticker) => println!(
            "   last={} bid={} ask={} updated={}\n",
            ticker.lastprice, ticker.buy, ticker.sell, ticker.updated
        ),
        Err(e) => println!("   Unexpected ticker shape: {}\n", e),
    }

    println!("2. Fetching trading pairs...");
    let pairs = client.tickers().pairs().await?;
    let count = pairs.as_array().map(Vec::len).unwrap_or_default();
    println!("   Found {} pairs\n", count);

    // === Step 2: Market summaries ===
    println!("3. Fetching market summaries...");
    let summaries: Vec<MarketSummary> =
        serde_json::from_value(client.public().get_market_summaries().await?)?;
    for summary in summaries.iter().take(5) {
        println!(
            "   - {}: last={} volume={}",
            summary.market_name, summary.last, summary.volume
        );
    }
    println!();

    // === Step 3: Order book ===
    println!("4. Fetching USD-BTC order book (depth 10)...");
    match client
        .public()
        .get_orderbook("USD-BTC", OrderbookType::Both, Some(10))
        .await
    {
        Ok(book) => {
            let book: Orderbook = serde_json::from_value(book)?;
            println!("   Bids: {}, Asks: {}", book.buy.len(), book.sell.len());
            if let Some(best_bid) = book.buy.first() {
                println!("   Best bid: {} @ {}", best_bid.quantity, best_bid.rate);
            }
            if let Some(best_ask) = book.sell.first() {
                println!("   Best ask: {} @ {}", best_ask.quantity, best_ask.rate);
            }
        }
        Err(e) => println!("   Failed to fetch order book ({:?}): {}", e.kind(), e),
    }

    println!("\n=== Example Complete ===");

    Ok(())
}
