// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Entry point of the `dropscan` binary
//!
//! Environment (a `.env` file is loaded if present):
//!
//! | Variable           | Meaning                                   | Default              |
//! |--------------------|-------------------------------------------|----------------------|
//! | `DROP_ADDRESS`     | Drop contract                             | buy-page drop        |
//! | `DROP_CHAIN`       | Chain id of the drop                      | 43114 (Avalanche)    |
//! | `ITEM_ID`          | ERC-1155 token id                         | 0                    |
//! | `RPC_URL`          | Endpoint for the drop's chain             | public Avalanche RPC |
//! | `RPC_TIMEOUT_SECS` | Per-read timeout                          | 30                   |
//! | `MAX_RETRIES`      | Transport retries                         | 3                    |
//! | `RPC_LOGGING`      | Log every RPC request (`true`/`false`)    | false                |
//! | `IPFS_GATEWAY`     | Gateway for `ipfs://` metadata            | `https://ipfs.io/ipfs/` |

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use alloy_chains::NamedChain;
use alloy_primitives::{Address, U256};
use dotenvy::dotenv;
use tracing::info;

use crate::config::{DropConfig, DropscanConfig, DropscanConfigBuilder};
use crate::errors::ConfigError;
use crate::gateway::AlloyChainReader;
use crate::resolver::{PriceResolver, ResolvedPriceView};
use crate::types::contract::ContractRef;

/// Main entry point for the application.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();

    let (config, drop_config) = load_from(|name| dotenvy::var(name).ok())?;
    let item_id = drop_config.item_id;
    info!(contract = %drop_config.contract, item_id = %item_id, "Resolving drop");

    let reader = AlloyChainReader::connect(&config, drop_config.contract.chain)?;
    let resolver = PriceResolver::new(Arc::new(reader), drop_config);

    let mut updates = resolver.subscribe();
    let watcher = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let view = ResolvedPriceView::compose(&updates.borrow_and_update(), item_id);
            info!(
                stage = ?view.stage,
                name = %view.display_name,
                symbol = %view.currency_symbol,
                price = ?view.price_per_token,
                "View updated"
            );
        }
    });

    let view = resolver.resolve().await;
    // Closing the channel ends the watcher
    drop(resolver);
    watcher.await?;

    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

/// Build both configurations from an environment lookup
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] for values that do not parse, or
/// [`ConfigError::Missing`] when the drop's chain has no endpoint.
pub fn load_from(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(DropscanConfig, DropConfig), ConfigError> {
    let default_drop = DropConfig::buy_page();

    let chain = match lookup("DROP_CHAIN") {
        Some(raw) => {
            let id = parse::<u64>("DROP_CHAIN", &raw)?;
            NamedChain::try_from(id)
                .map_err(|_| ConfigError::invalid("DROP_CHAIN", format!("unknown chain id {id}")))?
        }
        None => default_drop.contract.chain,
    };
    let address = lookup("DROP_ADDRESS")
        .map(|raw| parse::<Address>("DROP_ADDRESS", &raw))
        .transpose()?
        .unwrap_or(default_drop.contract.address);
    let item_id = lookup("ITEM_ID")
        .map(|raw| parse::<U256>("ITEM_ID", &raw))
        .transpose()?
        .unwrap_or(default_drop.item_id);

    let mut builder = DropscanConfigBuilder::with_defaults();
    if let Some(url) = lookup("RPC_URL") {
        builder = builder.chain_rpc_url(chain, url);
    }
    if let Some(raw) = lookup("RPC_TIMEOUT_SECS") {
        builder = builder.rpc_timeout(Duration::from_secs(parse("RPC_TIMEOUT_SECS", &raw)?));
    }
    if let Some(raw) = lookup("MAX_RETRIES") {
        builder = builder.max_retries(parse("MAX_RETRIES", &raw)?);
    }
    if let Some(raw) = lookup("RPC_LOGGING") {
        builder = builder.rpc_logging(parse("RPC_LOGGING", &raw)?);
    }
    if let Some(gateway) = lookup("IPFS_GATEWAY") {
        builder = builder.ipfs_gateway(gateway);
    }
    let config = builder.build();

    if config.get_rpc_url(chain).is_none() {
        return Err(ConfigError::missing("RPC_URL"));
    }

    Ok((config, DropConfig::new(ContractRef::new(address, chain), item_id)))
}

fn parse<T>(name: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| ConfigError::invalid(name, format!("{raw:?}: {e}")))
}
