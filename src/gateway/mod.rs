// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Chain read gateway
//!
//! Every read the resolver needs goes through the [`ChainReader`] trait. The
//! trait is object-safe so the resolver can take an `Arc<dyn ChainReader>`,
//! which lets tests swap in a recording mock and lets applications share one
//! reader between pages.
//!
//! "Pending" is not part of the result type: a read is pending for as long as
//! its future has not completed. Transport concerns such as retries and
//! timeouts belong to the implementation, see [`AlloyChainReader`].
//!
//! # Example: Implementing ChainReader
//!
//! ```rust,ignore
//! use async_trait::async_trait;
//! use dropscan::{ChainReader, ContractRef, GatewayError, InterfaceId};
//!
//! struct FixtureReader;
//!
//! #[async_trait]
//! impl ChainReader for FixtureReader {
//!     async fn supports_interface(
//!         &self,
//!         _contract: &ContractRef,
//!         interface_id: InterfaceId,
//!     ) -> Result<bool, GatewayError> {
//!         Ok(interface_id == dropscan::TokenStandard::ERC1155_INTERFACE_ID)
//!     }
//!     // ...
//! }
//! ```

use alloy_primitives::U256;
use async_trait::async_trait;

use crate::errors::GatewayError;
use crate::types::claim::ClaimCondition;
use crate::types::contract::ContractRef;
use crate::types::currency::CurrencyMetadata;
use crate::types::metadata::ItemMetadata;
use crate::types::standard::InterfaceId;

mod alloy;
mod contracts;
#[cfg(test)]
pub(crate) mod stub;
mod uri;

pub use alloy::AlloyChainReader;
pub use uri::{expand_token_uri, MetadataLoader};

/// The kind of read issued against the gateway
///
/// Used to label spans and, in tests, to record which reads were issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    /// ERC-165 `supportsInterface(id)`
    SupportsInterface(InterfaceId),
    /// Active claim condition of an ERC-721 drop
    Erc721ClaimCondition,
    /// Active claim condition of one ERC-1155 token
    Erc1155ClaimCondition {
        /// Token id the condition belongs to
        token_id: U256,
    },
    /// ERC-20 `decimals()` / `symbol()` of a currency
    CurrencyMetadata,
    /// Contract-level metadata
    ContractMetadata,
    /// Per-token metadata of an ERC-1155 item
    TokenMetadata {
        /// Token id the metadata belongs to
        token_id: U256,
    },
}

impl QueryKind {
    /// Stable name used in logs and spans
    pub const fn name(&self) -> &'static str {
        match self {
            QueryKind::SupportsInterface(_) => "supports_interface",
            QueryKind::Erc721ClaimCondition => "erc721_claim_condition",
            QueryKind::Erc1155ClaimCondition { .. } => "erc1155_claim_condition",
            QueryKind::CurrencyMetadata => "currency_metadata",
            QueryKind::ContractMetadata => "contract_metadata",
            QueryKind::TokenMetadata { .. } => "token_metadata",
        }
    }

    /// Whether this is one of the two claim condition reads
    pub const fn is_claim_condition(&self) -> bool {
        matches!(
            self,
            QueryKind::Erc721ClaimCondition | QueryKind::Erc1155ClaimCondition { .. }
        )
    }
}

/// Read-only access to drop contracts
///
/// All methods are idempotent and side-effect free.
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// ERC-165 capability check
    ///
    /// A contract that does not implement ERC-165 should surface as an error for
    /// which [`GatewayError::is_unsupported`] is true.
    async fn supports_interface(
        &self,
        contract: &ContractRef,
        interface_id: InterfaceId,
    ) -> Result<bool, GatewayError>;

    /// Active claim condition of an ERC-721 drop (per contract)
    async fn erc721_claim_condition(
        &self,
        contract: &ContractRef,
    ) -> Result<ClaimCondition, GatewayError>;

    /// Active claim condition of one ERC-1155 token
    async fn erc1155_claim_condition(
        &self,
        contract: &ContractRef,
        token_id: U256,
    ) -> Result<ClaimCondition, GatewayError>;

    /// Decimals, symbol and name of an ERC-20 currency
    async fn currency_metadata(
        &self,
        currency: &ContractRef,
    ) -> Result<CurrencyMetadata, GatewayError>;

    /// Contract-level display metadata
    async fn contract_metadata(&self, contract: &ContractRef)
        -> Result<ItemMetadata, GatewayError>;

    /// Display metadata of one ERC-1155 token
    async fn token_metadata(
        &self,
        contract: &ContractRef,
        token_id: U256,
    ) -> Result<ItemMetadata, GatewayError>;
}
