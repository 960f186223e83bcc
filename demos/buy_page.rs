/// Example resolving the buy page drop and printing each partial view
///
/// This example shows how to:
/// 1. Connect an `AlloyChainReader` for the drop's chain
/// 2. Subscribe to resolution state changes
/// 3. Render partial views while reads are still in flight
///
/// Run with:
/// ```bash
/// RPC_URL=https://api.avax.network/ext/bc/C/rpc \
/// cargo run --package dropscan --example buy_page
/// ```
///
/// Without `RPC_URL` the public Avalanche endpoint is used.
use std::env;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use dropscan::{
    AlloyChainReader, DropConfig, DropscanConfigBuilder, PriceResolver, ResolvedPriceView,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    dotenvy::dotenv().ok();

    let drop_config = DropConfig::buy_page();
    let mut builder = DropscanConfigBuilder::with_defaults().rpc_timeout(Duration::from_secs(15));
    if let Ok(url) = env::var("RPC_URL") {
        builder = builder.chain_rpc_url(drop_config.contract.chain, url);
    }
    let config = builder.build();

    let reader = AlloyChainReader::connect(&config, drop_config.contract.chain)
        .context("Failed to connect to the drop's chain")?;
    let resolver = PriceResolver::new(Arc::new(reader), drop_config);

    let mut updates = resolver.subscribe();
    let printer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let view = ResolvedPriceView::compose(&updates.borrow_and_update(), drop_config.item_id);
            info!(
                stage = ?view.stage,
                name = %view.display_name,
                price = view.price_label.as_deref().unwrap_or("-"),
                "Partial view"
            );
        }
    });

    let view = resolver.resolve().await;
    drop(resolver);
    printer.await?;

    println!("\n=== {} ===", drop_config.contract);
    println!("Name:     {}", view.display_name);
    println!("About:    {}", view.description);
    println!("Image:    {}", view.image);
    println!(
        "Standard: {}",
        view.standard.map_or("unknown", |standard| standard.name())
    );
    match (&view.price_label, view.is_free()) {
        (_, true) => println!("Price:    free"),
        (Some(label), false) => println!("Price:    {label}"),
        (None, false) => println!("Price:    unavailable ({:?})", view.stage),
    }

    Ok(())
}
