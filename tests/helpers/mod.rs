// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for dropscan integration tests
//!
//! Provides a scripted [`ChainReader`] so the resolver can be exercised
//! without a node.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use alloy_chains::NamedChain;
use alloy_primitives::{address, Address, U256};
use async_trait::async_trait;
use dropscan::{
    ChainReader, ClaimCondition, ContractRef, CurrencyMetadata, DropConfig, GatewayError,
    InterfaceId, ItemMetadata, QueryKind, RpcError, TokenStandard,
};

/// Drop contract used by the scenarios
pub const DROP: Address = address!("cd4c4726c74436b28e6af18ad84c63ca457c9273");
/// An 18-decimal ERC-20
pub const CURRENCY_C: Address = address!("cccccccccccccccccccccccccccccccccccccccc");
/// A 6-decimal ERC-20
pub const CURRENCY_D: Address = address!("dddddddddddddddddddddddddddddddddddddddd");

/// Item 0 of the scenario drop on Avalanche
pub fn drop_config() -> DropConfig {
    DropConfig::new(ContractRef::new(DROP, NamedChain::Avalanche), U256::ZERO)
}

/// Scripted answer for one read
#[derive(Debug, Clone)]
pub enum Reply<T> {
    /// Return the value
    Ok(T),
    /// Return the value after a delay
    Delayed(Duration, T),
    /// The contract reverts
    Revert,
    /// The node cannot be reached
    Offline,
    /// The read never completes
    Pending,
}

impl<T: Clone> Reply<T> {
    async fn answer(&self, operation: &'static str, address: Address) -> Result<T, GatewayError> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::Delayed(delay, value) => {
                tokio::time::sleep(*delay).await;
                Ok(value.clone())
            }
            Reply::Revert => Err(RpcError::call_reverted(
                operation,
                address,
                std::io::Error::other("execution reverted"),
            )
            .into()),
            Reply::Offline => Err(RpcError::chain_connection_failed(
                operation,
                std::io::Error::other("connection refused"),
            )
            .into()),
            Reply::Pending => futures::future::pending().await,
        }
    }
}

/// A [`ChainReader`] that answers from a script and records every read
///
/// Unscripted reads revert, so a fresh mock looks like a contract that
/// implements nothing.
///
/// # Example
///
/// ```rust,ignore
/// let mock = Arc::new(
///     MockChainReader::new()
///         .erc721(Reply::Ok(true))
///         .erc721_condition(Reply::Ok(ClaimCondition::new(2_500_000u64, CURRENCY_D)))
///         .currency(CURRENCY_D, Reply::Ok(CurrencyMetadata::new("USDC", 6))),
/// );
/// let resolver = PriceResolver::new(mock.clone(), drop_config());
/// ```
pub struct MockChainReader {
    erc721: Reply<bool>,
    erc1155: Reply<bool>,
    erc721_condition: Reply<ClaimCondition>,
    erc1155_condition: Reply<ClaimCondition>,
    currencies: HashMap<Address, Reply<CurrencyMetadata>>,
    contract_metadata: Reply<ItemMetadata>,
    token_metadata: Reply<ItemMetadata>,
    calls: Mutex<Vec<QueryKind>>,
}

impl Default for MockChainReader {
    fn default() -> Self {
        Self::new()
    }
}

impl MockChainReader {
    pub fn new() -> Self {
        Self {
            erc721: Reply::Revert,
            erc1155: Reply::Revert,
            erc721_condition: Reply::Revert,
            erc1155_condition: Reply::Revert,
            currencies: HashMap::new(),
            contract_metadata: Reply::Revert,
            token_metadata: Reply::Revert,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Answer to the ERC-721 interface check
    pub fn erc721(mut self, reply: Reply<bool>) -> Self {
        self.erc721 = reply;
        self
    }

    /// Answer to the ERC-1155 interface check
    pub fn erc1155(mut self, reply: Reply<bool>) -> Self {
        self.erc1155 = reply;
        self
    }

    pub fn erc721_condition(mut self, reply: Reply<ClaimCondition>) -> Self {
        self.erc721_condition = reply;
        self
    }

    pub fn erc1155_condition(mut self, reply: Reply<ClaimCondition>) -> Self {
        self.erc1155_condition = reply;
        self
    }

    /// Answer to `currency_metadata` for one currency address
    pub fn currency(mut self, address: Address, reply: Reply<CurrencyMetadata>) -> Self {
        self.currencies.insert(address, reply);
        self
    }

    pub fn contract_metadata(mut self, reply: Reply<ItemMetadata>) -> Self {
        self.contract_metadata = reply;
        self
    }

    pub fn token_metadata(mut self, reply: Reply<ItemMetadata>) -> Self {
        self.token_metadata = reply;
        self
    }

    /// Every read issued so far, in order
    pub fn calls(&self) -> Vec<QueryKind> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of reads matching `predicate`
    pub fn count(&self, predicate: impl Fn(&QueryKind) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|q| predicate(q)).count()
    }

    /// Number of claim condition reads of either family
    pub fn condition_reads(&self) -> usize {
        self.count(QueryKind::is_claim_condition)
    }

    /// Number of currency metadata reads
    pub fn currency_reads(&self) -> usize {
        self.count(|q| *q == QueryKind::CurrencyMetadata)
    }

    fn record(&self, kind: QueryKind) {
        self.calls.lock().unwrap().push(kind);
    }
}

#[async_trait]
impl ChainReader for MockChainReader {
    async fn supports_interface(
        &self,
        contract: &ContractRef,
        interface_id: InterfaceId,
    ) -> Result<bool, GatewayError> {
        self.record(QueryKind::SupportsInterface(interface_id));
        let reply = if interface_id == TokenStandard::ERC721_INTERFACE_ID {
            &self.erc721
        } else if interface_id == TokenStandard::ERC1155_INTERFACE_ID {
            &self.erc1155
        } else {
            return Ok(false);
        };
        reply.answer("supportsInterface", contract.address).await
    }

    async fn erc721_claim_condition(
        &self,
        contract: &ContractRef,
    ) -> Result<ClaimCondition, GatewayError> {
        self.record(QueryKind::Erc721ClaimCondition);
        self.erc721_condition
            .answer("getClaimConditionById", contract.address)
            .await
    }

    async fn erc1155_claim_condition(
        &self,
        contract: &ContractRef,
        token_id: U256,
    ) -> Result<ClaimCondition, GatewayError> {
        self.record(QueryKind::Erc1155ClaimCondition { token_id });
        self.erc1155_condition
            .answer("getClaimConditionById", contract.address)
            .await
    }

    async fn currency_metadata(
        &self,
        currency: &ContractRef,
    ) -> Result<CurrencyMetadata, GatewayError> {
        self.record(QueryKind::CurrencyMetadata);
        let reply = self
            .currencies
            .get(&currency.address)
            .cloned()
            .unwrap_or(Reply::Revert);
        reply.answer("decimals", currency.address).await
    }

    async fn contract_metadata(
        &self,
        contract: &ContractRef,
    ) -> Result<ItemMetadata, GatewayError> {
        self.record(QueryKind::ContractMetadata);
        self.contract_metadata
            .answer("contractURI", contract.address)
            .await
    }

    async fn token_metadata(
        &self,
        contract: &ContractRef,
        token_id: U256,
    ) -> Result<ItemMetadata, GatewayError> {
        self.record(QueryKind::TokenMetadata { token_id });
        self.token_metadata.answer("uri", contract.address).await
    }
}
