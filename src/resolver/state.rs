// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Resolution state published by the price resolver

use alloy_primitives::Address;
use serde::Serialize;

use crate::types::claim::ClaimCondition;
use crate::types::currency::CurrencyMetadata;
use crate::types::metadata::ItemMetadata;
use crate::types::standard::{Capability, StandardFlags, TokenStandard};
use crate::types::tokens::NormalizedAmount;

use super::conditions::merge_conditions;
use super::normalize::normalize;

/// How far a resolution has progressed
///
/// Stages only move forward within one resolution; a new resolution starts
/// again at [`Stage::Idle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Nothing requested yet
    Idle,
    /// Interface checks issued, no usable answer yet
    StandardUnknown,
    /// A family is supported, or both checks answered
    StandardKnown,
    /// At least one claim condition read in flight
    ConditionPending,
    /// A merged claim condition is available
    ConditionKnown,
    /// Currency metadata read in flight
    CurrencyPending,
    /// Currency stage finished without a usable price
    CurrencyKnown,
    /// Price available for display
    PriceResolved,
}

/// Currency metadata together with the address it was resolved for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedCurrency {
    /// Currency contract, or the native-currency sentinel
    pub address: Address,
    /// Resolved display metadata
    pub metadata: CurrencyMetadata,
}

/// Everything known about one drop at a point in time
///
/// Values are absent until their read completes. Fields are public so tests
/// and rendering layers can build or inspect states directly; the resolver
/// mutates it only through the `pub(crate)` transition methods, each of which
/// reports whether anything changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolutionState {
    /// Set once a resolution has begun
    pub started: bool,
    /// ERC-165 check results
    pub flags: StandardFlags,
    /// Active condition of an ERC-721 drop
    pub erc721_condition: Option<ClaimCondition>,
    /// Active condition of the configured ERC-1155 item
    pub erc1155_condition: Option<ClaimCondition>,
    /// Claim condition reads currently in flight
    pub conditions_pending: u8,
    /// Paying currency, keyed by address
    pub currency: Option<ResolvedCurrency>,
    /// Currency address the currency stage is running for
    pub currency_target: Option<Address>,
    /// Whether the currency read is in flight
    pub currency_pending: bool,
    /// Whether the currency stage has finished
    pub currency_settled: bool,
    /// Contract-level metadata
    pub contract_metadata: Option<ItemMetadata>,
    /// Metadata of the configured ERC-1155 item
    pub token_metadata: Option<ItemMetadata>,
}

impl ResolutionState {
    /// Claim condition to display: ERC-1155 first, then ERC-721
    pub fn merged_condition(&self) -> Option<&ClaimCondition> {
        merge_conditions(
            self.erc721_condition.as_ref(),
            self.erc1155_condition.as_ref(),
        )
    }

    /// Currency metadata, only if it belongs to the merged condition's currency
    pub fn matched_currency(&self) -> Option<&CurrencyMetadata> {
        let address = self.merged_condition()?.currency_address()?;
        self.currency
            .as_ref()
            .filter(|currency| currency.address == address)
            .map(|currency| &currency.metadata)
    }

    /// Display price of the merged condition in its matched currency
    pub fn price(&self) -> Option<NormalizedAmount> {
        normalize(
            self.merged_condition().map(|condition| condition.price_per_token),
            self.matched_currency().map(|currency| currency.decimals),
        )
    }

    /// Current stage, derived from the resolved values
    pub fn stage(&self) -> Stage {
        let flags_settled = self.flags.any_supported()
            || (self.flags.erc721.is_known() && self.flags.erc1155.is_known());

        if !self.started {
            Stage::Idle
        } else if self.price().is_some() {
            Stage::PriceResolved
        } else if self.currency_settled {
            Stage::CurrencyKnown
        } else if self.currency_pending {
            Stage::CurrencyPending
        } else if self.conditions_pending > 0 {
            Stage::ConditionPending
        } else if self.merged_condition().is_some() {
            Stage::ConditionKnown
        } else if flags_settled {
            Stage::StandardKnown
        } else {
            Stage::StandardUnknown
        }
    }

    pub(crate) fn reset(&mut self) -> bool {
        replace(self, Self::default())
    }

    pub(crate) fn begin(&mut self) -> bool {
        replace(&mut self.started, true)
    }

    pub(crate) fn set_capability(&mut self, standard: TokenStandard, capability: Capability) -> bool {
        self.flags.set(standard, capability)
    }

    pub(crate) fn begin_condition(&mut self) -> bool {
        self.conditions_pending = self.conditions_pending.saturating_add(1);
        true
    }

    pub(crate) fn finish_condition(
        &mut self,
        standard: TokenStandard,
        condition: Option<ClaimCondition>,
    ) -> bool {
        self.conditions_pending = self.conditions_pending.saturating_sub(1);
        let slot = match standard {
            TokenStandard::Erc721 => &mut self.erc721_condition,
            TokenStandard::Erc1155 => &mut self.erc1155_condition,
        };
        replace(slot, condition);
        true
    }

    /// Start the currency stage for `address`
    ///
    /// Returns false if the stage already runs, or ran, for that address. A new
    /// address discards whatever was resolved for the previous one.
    pub(crate) fn begin_currency(&mut self, address: Address) -> bool {
        if self.currency_target == Some(address) {
            return false;
        }
        self.currency_target = Some(address);
        self.currency_pending = true;
        self.currency_settled = false;
        self.currency = None;
        true
    }

    /// Record the result of the read started for `address`
    ///
    /// Results for an address the stage has since moved away from are dropped.
    pub(crate) fn finish_currency(
        &mut self,
        address: Address,
        currency: Option<ResolvedCurrency>,
    ) -> bool {
        if self.currency_target != Some(address) {
            return false;
        }
        let pending = replace(&mut self.currency_pending, false);
        let settled = replace(&mut self.currency_settled, true);
        let value = replace(&mut self.currency, currency);
        pending || settled || value
    }

    /// Abandon the currency stage; the merged condition has no currency
    pub(crate) fn clear_currency(&mut self) -> bool {
        let target = replace(&mut self.currency_target, None);
        let pending = replace(&mut self.currency_pending, false);
        let settled = replace(&mut self.currency_settled, false);
        let value = replace(&mut self.currency, None);
        target || pending || settled || value
    }

    pub(crate) fn set_contract_metadata(&mut self, metadata: Option<ItemMetadata>) -> bool {
        replace(&mut self.contract_metadata, metadata)
    }

    pub(crate) fn set_token_metadata(&mut self, metadata: Option<ItemMetadata>) -> bool {
        replace(&mut self.token_metadata, metadata)
    }
}

/// Overwrite `slot`, returning whether the value changed
fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
