// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for dropscan operations.
//!
//! Telemetry is kept out of the business logic: each instrumented operation has
//! a span helper here, and the operation attaches it with
//! [`tracing::Instrument`].
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> T {
//!     let span = spans::my_operation(param_value);
//!     async move {
//!         // Business logic here
//!     }
//!     .instrument(span)
//!     .await
//! }
//! ```

use alloy_primitives::{Address, U256};
use tracing::Span;

use crate::gateway::QueryKind;
use crate::types::contract::ContractRef;
use crate::types::standard::TokenStandard;

/// Create span for a full price resolution of one drop.
///
/// Parent: None (root span for this operation)
/// Children: check_standard, fetch_claim_condition, resolve_currency,
/// fetch_item_metadata
#[inline]
pub(crate) fn resolve_drop(contract: &ContractRef, item_id: U256) -> Span {
    tracing::info_span!(
        "dropscan.resolve_drop",
        chain_id = %contract.chain,
        contract = %contract.address,
        item_id = %item_id,
    )
}

/// Create span for one ERC-165 capability check.
///
/// Parent: resolve_drop span
/// Children: chain_read span
#[inline]
pub(crate) fn check_standard(contract: &ContractRef, standard: TokenStandard) -> Span {
    tracing::debug_span!(
        "dropscan.check_standard",
        contract = %contract.address,
        standard = standard.name(),
        interface_id = %standard.interface_id(),
    )
}

/// Create span for fetching the active claim condition of one family.
///
/// Parent: resolve_drop span
/// Children: chain_read span
#[inline]
pub(crate) fn fetch_claim_condition(
    contract: &ContractRef,
    standard: TokenStandard,
    item_id: Option<U256>,
) -> Span {
    tracing::debug_span!(
        "dropscan.fetch_claim_condition",
        contract = %contract.address,
        standard = standard.name(),
        item_id = ?item_id,
    )
}

/// Create span for resolving a currency's decimals and symbol.
///
/// Parent: resolve_drop span
/// Children: chain_read span (skipped for the native currency)
#[inline]
pub(crate) fn resolve_currency(currency: Address) -> Span {
    tracing::debug_span!("dropscan.resolve_currency", currency = %currency)
}

/// Create span for loading contract or token metadata.
///
/// Parent: resolve_drop span
/// Children: chain_read span
#[inline]
pub(crate) fn fetch_item_metadata(contract: &ContractRef, item_id: Option<U256>) -> Span {
    tracing::debug_span!(
        "dropscan.fetch_item_metadata",
        contract = %contract.address,
        item_id = ?item_id,
    )
}

/// Create span for a single gateway read.
///
/// Parent: any resolver stage span
/// Children: transport rpc_call spans
#[inline]
pub(crate) fn chain_read(kind: &QueryKind, contract: &ContractRef) -> Span {
    tracing::trace_span!(
        "dropscan.chain_read",
        query = kind.name(),
        chain_id = %contract.chain,
        contract = %contract.address,
    )
}
