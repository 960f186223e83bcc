// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the dropscan library.
//!
//! Like the rest of the crate, errors follow a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling ([`RpcError`],
//!   [`MetadataError`], [`GatewayError`], [`ConfigError`])
//! - **Unified error type** ([`DropscanError`]) for callers that only need to
//!   report a failure
//!
//! Note that price resolution itself never returns an error: the resolver
//! absorbs gateway failures and leaves the affected part of the view empty.
//! These types describe what the gateway, provider factory and binary can
//! fail with.
//!
//! # Example
//!
//! ```rust,ignore
//! use dropscan::{DropscanError, ProviderConfig, create_http_provider};
//!
//! fn connect(url: &str) -> Result<(), DropscanError> {
//!     let _provider = create_http_provider(ProviderConfig::new(url))?;
//!     Ok(())
//! }
//! ```

mod config;
mod gateway;
mod metadata;
mod rpc;

pub use config::ConfigError;
pub use gateway::GatewayError;
pub use metadata::MetadataError;
pub use rpc::RpcError;

/// Unified error type for all dropscan operations.
///
/// All module-specific error types convert into `DropscanError` via `From`,
/// so `?` works across module boundaries.
#[derive(Debug, thiserror::Error)]
pub enum DropscanError {
    /// Error from a contract read.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// Error from the chain read gateway.
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Error from metadata loading.
    #[error("Metadata error: {0}")]
    Metadata(#[from] MetadataError),

    /// Error from configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
