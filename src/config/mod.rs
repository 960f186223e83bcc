// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for dropscan operations
//!
//! Two kinds of configuration are consumed at startup and never re-derived:
//!
//! - [`DropConfig`]: *which* drop to resolve (contract + item id)
//! - [`DropscanConfig`]: *how* to read it (RPC endpoints, timeouts, retries,
//!   IPFS gateway)
//!
//! # Example: Using defaults
//!
//! ```rust
//! use dropscan::{DropConfig, DropscanConfig};
//!
//! let config = DropscanConfig::default();
//! let drop = DropConfig::buy_page();
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use dropscan::DropscanConfigBuilder;
//! use std::time::Duration;
//! use alloy_chains::NamedChain;
//!
//! let config = DropscanConfigBuilder::with_defaults()
//!     .rpc_timeout(Duration::from_secs(10))
//!     .chain_rpc_url(NamedChain::AvalancheFuji, "https://api.avax-test.network/ext/bc/C/rpc")
//!     .build();
//! ```

use std::collections::HashMap;
use std::time::Duration;

use alloy_chains::NamedChain;
use alloy_primitives::U256;

use crate::types::contract::ContractRef;

pub mod constants;

use constants::drops;

/// Configuration for dropscan reads
///
/// Use [`DropscanConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone)]
pub struct DropscanConfig {
    /// Timeout applied to every contract read and metadata fetch
    /// Default: 30 seconds
    pub rpc_timeout: Duration,

    /// Transport-level retries for transient RPC failures
    /// Default: 3
    pub max_retries: u32,

    /// Whether the RPC client logs each request
    /// Default: false
    pub rpc_logging: bool,

    /// HTTP gateway prefix that `ipfs://` URIs are rewritten onto
    pub ipfs_gateway: String,

    /// Chain-specific overrides
    pub chain_overrides: HashMap<NamedChain, ChainConfig>,
}

/// Chain-specific configuration overrides
#[derive(Debug, Clone, Default)]
pub struct ChainConfig {
    /// RPC endpoint for this chain
    pub rpc_url: Option<String>,

    /// Override RPC timeout for this chain
    pub rpc_timeout: Option<Duration>,
}

impl Default for DropscanConfig {
    fn default() -> Self {
        Self::with_common_defaults()
    }
}

impl DropscanConfig {
    /// Create config with public Avalanche endpoints
    ///
    /// Both the buy-page drop (Avalanche C-Chain) and the game reward (Fuji)
    /// resolve out of the box.
    pub fn with_common_defaults() -> Self {
        let mut config = Self::minimal();

        config.set_chain_override(
            NamedChain::Avalanche,
            ChainConfig {
                rpc_url: Some("https://api.avax.network/ext/bc/C/rpc".to_string()),
                rpc_timeout: None, // Use default timeout
            },
        );

        config.set_chain_override(
            NamedChain::AvalancheFuji,
            ChainConfig {
                rpc_url: Some("https://api.avax-test.network/ext/bc/C/rpc".to_string()),
                rpc_timeout: None,
            },
        );

        config
    }

    /// Create minimal config with no chain endpoints
    pub fn minimal() -> Self {
        Self {
            rpc_timeout: Duration::from_secs(30),
            max_retries: 3,
            rpc_logging: false,
            ipfs_gateway: constants::DEFAULT_IPFS_GATEWAY.to_string(),
            chain_overrides: HashMap::new(),
        }
    }

    /// Get the RPC endpoint configured for a chain, if any
    pub fn get_rpc_url(&self, chain: NamedChain) -> Option<&str> {
        self.chain_overrides
            .get(&chain)
            .and_then(|c| c.rpc_url.as_deref())
    }

    /// Get effective RPC timeout for a specific chain
    ///
    /// Returns chain-specific override if set, otherwise returns global default.
    ///
    /// ```rust
    /// use dropscan::DropscanConfig;
    /// use alloy_chains::NamedChain;
    /// use std::time::Duration;
    ///
    /// let config = DropscanConfig::default();
    /// assert_eq!(config.get_rpc_timeout(NamedChain::Avalanche), Duration::from_secs(30));
    /// ```
    pub fn get_rpc_timeout(&self, chain: NamedChain) -> Duration {
        self.chain_overrides
            .get(&chain)
            .and_then(|c| c.rpc_timeout)
            .unwrap_or(self.rpc_timeout)
    }

    /// Set chain-specific override
    pub fn set_chain_override(&mut self, chain: NamedChain, config: ChainConfig) {
        self.chain_overrides.insert(chain, config);
    }
}

/// Builder for [`DropscanConfig`]
#[derive(Debug, Clone)]
pub struct DropscanConfigBuilder {
    config: DropscanConfig,
}

impl Default for DropscanConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DropscanConfigBuilder {
    /// Start from [`DropscanConfig::minimal`]
    pub fn new() -> Self {
        Self {
            config: DropscanConfig::minimal(),
        }
    }

    /// Start from [`DropscanConfig::with_common_defaults`]
    pub fn with_defaults() -> Self {
        Self {
            config: DropscanConfig::with_common_defaults(),
        }
    }

    /// Set the global RPC timeout
    pub fn rpc_timeout(mut self, timeout: Duration) -> Self {
        self.config.rpc_timeout = timeout;
        self
    }

    /// Set the number of transport retries
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Enable or disable RPC request logging
    pub fn rpc_logging(mut self, enabled: bool) -> Self {
        self.config.rpc_logging = enabled;
        self
    }

    /// Set the IPFS gateway prefix
    pub fn ipfs_gateway(mut self, gateway: impl Into<String>) -> Self {
        self.config.ipfs_gateway = gateway.into();
        self
    }

    /// Set the RPC endpoint for a chain, keeping any timeout override
    pub fn chain_rpc_url(mut self, chain: NamedChain, url: impl Into<String>) -> Self {
        self.config
            .chain_overrides
            .entry(chain)
            .or_default()
            .rpc_url = Some(url.into());
        self
    }

    /// Set the RPC timeout for a chain, keeping any endpoint override
    pub fn chain_rpc_timeout(mut self, chain: NamedChain, timeout: Duration) -> Self {
        self.config
            .chain_overrides
            .entry(chain)
            .or_default()
            .rpc_timeout = Some(timeout);
        self
    }

    /// Build the configuration
    pub fn build(self) -> DropscanConfig {
        self.config
    }
}

/// The drop a page resolves: a contract and the item it sells
///
/// For ERC-721 drops the item id is ignored; ERC-1155 drops use it for the
/// claim condition and the per-item metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropConfig {
    /// The drop contract
    pub contract: ContractRef,
    /// Token id of the item on sale
    pub item_id: U256,
}

impl DropConfig {
    /// Create a drop configuration
    pub fn new(contract: ContractRef, item_id: impl Into<U256>) -> Self {
        Self {
            contract,
            item_id: item_id.into(),
        }
    }

    /// The item sold on the buy page
    pub fn buy_page() -> Self {
        Self::new(
            ContractRef::new(drops::BUY_PAGE_DROP, NamedChain::Avalanche),
            U256::from(drops::BUY_PAGE_ITEM_ID),
        )
    }

    /// The reward token of the grid game
    pub fn game_reward() -> Self {
        Self::new(
            ContractRef::new(drops::GAME_REWARD_DROP, NamedChain::AvalancheFuji),
            U256::from(drops::GAME_REWARD_TOKEN_ID),
        )
    }
}
