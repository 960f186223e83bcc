// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Canned [`ChainReader`] for unit tests

use std::sync::atomic::{AtomicUsize, Ordering};

use alloy_primitives::U256;
use async_trait::async_trait;

use super::ChainReader;
use crate::errors::{GatewayError, RpcError};
use crate::types::claim::ClaimCondition;
use crate::types::contract::ContractRef;
use crate::types::currency::CurrencyMetadata;
use crate::types::metadata::ItemMetadata;
use crate::types::standard::InterfaceId;

/// How every read of a [`StubReader`] ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Answer,
    Revert,
    Offline,
}

/// Answers every read the same way and counts them
#[derive(Debug)]
pub(crate) struct StubReader {
    pub outcome: Outcome,
    pub supports: bool,
    pub condition: ClaimCondition,
    pub currency: CurrencyMetadata,
    reads: AtomicUsize,
}

impl StubReader {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            supports: true,
            condition: ClaimCondition::new(1u64, alloy_primitives::Address::ZERO),
            currency: CurrencyMetadata::new("USDC", 6),
            reads: AtomicUsize::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn answer<T>(&self, contract: &ContractRef, value: T) -> Result<T, GatewayError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        match self.outcome {
            Outcome::Answer => Ok(value),
            Outcome::Revert => Err(RpcError::call_reverted(
                "stub",
                contract.address,
                std::io::Error::other("execution reverted"),
            )
            .into()),
            Outcome::Offline => Err(RpcError::chain_connection_failed(
                "stub",
                std::io::Error::other("connection refused"),
            )
            .into()),
        }
    }
}

#[async_trait]
impl ChainReader for StubReader {
    async fn supports_interface(
        &self,
        contract: &ContractRef,
        _interface_id: InterfaceId,
    ) -> Result<bool, GatewayError> {
        self.answer(contract, self.supports)
    }

    async fn erc721_claim_condition(
        &self,
        contract: &ContractRef,
    ) -> Result<ClaimCondition, GatewayError> {
        self.answer(contract, self.condition.clone())
    }

    async fn erc1155_claim_condition(
        &self,
        contract: &ContractRef,
        _token_id: U256,
    ) -> Result<ClaimCondition, GatewayError> {
        self.answer(contract, self.condition.clone())
    }

    async fn currency_metadata(
        &self,
        currency: &ContractRef,
    ) -> Result<CurrencyMetadata, GatewayError> {
        self.answer(currency, self.currency.clone())
    }

    async fn contract_metadata(
        &self,
        contract: &ContractRef,
    ) -> Result<ItemMetadata, GatewayError> {
        self.answer(contract, ItemMetadata::named("Stub"))
    }

    async fn token_metadata(
        &self,
        contract: &ContractRef,
        _token_id: U256,
    ) -> Result<ItemMetadata, GatewayError> {
        self.answer(contract, ItemMetadata::named("Stub #0"))
    }
}
