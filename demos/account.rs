//! Account example for the C-CEX SDK.
//!
//! Requires `CCEX_API_KEY` and `CCEX_API_SECRET` in the environment.
//!
//! This example shows how to:
//! 1. Check balances
//! 2. List open orders and recent order history
//! 3. Place and cancel a limit order (only with `CCEX_PLACE_ORDER=1`)

use ccex_api_sdk::types::{Balance, OpenOrder};
use ccex_api_sdk::{CcexClient, ClientConfig, ErrorKind};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("=== C-CEX Account Example ===\n");

    let client = CcexClient::new(ClientConfig::from_env()?)?;
    let private = match client.private() {
        Ok(private) => private,
        Err(e) => {
            println!("Private endpoints unavailable: {}", e);
            println!("Set CCEX_API_KEY and CCEX_API_SECRET to run this example.");
            return Ok(());
        }
    };

    // === Step 1: Balances ===
    println!("1. Checking balances...");
    let balances: Vec<Balance> = serde_json::from_value(private.get_balances().await?)?;
    for balance in balances.iter().filter(|b| b.balance > 0.0) {
        println!(
            "   - {}: total={} available={}",
            balance.currency, balance.balance, balance.available
        );
    }
    println!();

    // === Step 2: Orders ===
    println!("2. Checking open orders...");
    let orders: Vec<OpenOrder> = serde_json::from_value(private.get_open_orders(None).await?)?;
    println!("   Open orders: {}", orders.len());
    for order in &orders {
        println!(
            "   - {} {} {} @ {} remaining={}",
            order.order_uuid, order.order_type, order.exchange, order.limit, order.quantity_remaining
        );
    }

    println!("\n3. Fetching last 10 orders...");
    let history = private.get_order_history(None, Some(10)).await?;
    println!("   {}\n", history);

    // === Step 3: Trading ===
    if std::env::var("CCEX_PLACE_ORDER").as_deref() == Ok("1") {
        println!("4. Placing a small buy limit order on LTC-BTC...");
        match private.buy_limit("LTC-BTC", 0.1, 0.00001).await {
            Ok(uuid) => {
                println!("   Order placed: {}", uuid);
                if let Some(uuid) = uuid.as_str() {
                    match private.cancel(uuid).await {
                        Ok(_) => println!("   Order cancelled"),
                        Err(e) => println!("   Cancel failed: {}", e),
                    }
                }
            }
            Err(e) if e.kind() == ErrorKind::ApiRejected => {
                println!("   Exchange refused the order: {}", e)
            }
            Err(e) => return Err(e.into()),
        }
    }

    println!("\n=== Example Complete ===");

    Ok(())
}
