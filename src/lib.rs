// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Contract capability detection and claim price resolution for NFT drops.
//!
//! `dropscan` answers the questions a buy page asks about a drop contract:
//! which token standard it implements, what its active claim condition
//! charges, in which currency, and how that price reads to a human. It also
//! models the grid game whose winners claim a reward token.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use dropscan::{AlloyChainReader, DropConfig, DropscanConfig, PriceResolver};
//!
//! let config = DropscanConfig::default();
//! let drop = DropConfig::buy_page();
//! let reader = AlloyChainReader::connect(&config, drop.contract.chain)?;
//!
//! let view = PriceResolver::new(Arc::new(reader), drop).resolve().await;
//! ```

pub mod bootstrap;
pub mod config;
pub mod errors;
pub mod game;
pub mod gateway;
pub mod provider;
pub mod resolver;
pub mod transport;
pub mod types;

mod spans;

pub use config::{ChainConfig, DropConfig, DropscanConfig, DropscanConfigBuilder};
pub use errors::{ConfigError, DropscanError, GatewayError, MetadataError, RpcError};
pub use game::{Direction, GamePhase, GridGame, MoveOutcome, Position, RewardClaim};
pub use gateway::{expand_token_uri, AlloyChainReader, ChainReader, MetadataLoader, QueryKind};
pub use provider::{create_http_provider, DropProvider, ProviderConfig};
pub use resolver::{
    format_units, normalize, PriceResolver, ResolutionState, ResolvedCurrency,
    ResolvedPriceView, Stage,
};
pub use types::claim::ClaimCondition;
pub use types::contract::ContractRef;
pub use types::currency::CurrencyMetadata;
pub use types::metadata::ItemMetadata;
pub use types::standard::{Capability, InterfaceId, StandardFlags, TokenStandard};
pub use types::tokens::{NormalizedAmount, TokenAmount, TokenDecimals};
