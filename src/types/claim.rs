// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Claim conditions

use alloy_primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};

use super::tokens::TokenAmount;

/// The active sale condition of a drop
///
/// ERC-721 drops have one active condition per contract; ERC-1155 drops have one
/// per token id. Only `price_per_token` and `currency` feed the price; the other
/// fields are carried through for the purchase component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimCondition {
    /// Price of one token in the currency's smallest unit
    pub price_per_token: TokenAmount,
    /// Paying currency; the native-currency sentinel for AVAX/ETH
    pub currency: Address,
    /// Unix timestamp from which the condition is active
    pub start_timestamp: U256,
    /// Maximum number of tokens claimable under this condition
    pub max_claimable_supply: U256,
    /// Tokens already claimed under this condition
    pub supply_claimed: U256,
    /// Per-wallet claim limit
    pub quantity_limit_per_wallet: U256,
    /// Allowlist root; zero when the claim is public
    pub merkle_root: B256,
    /// Free-form metadata string attached to the condition
    pub metadata: String,
}

impl ClaimCondition {
    /// A public condition with only price and currency set
    pub fn new(price_per_token: impl Into<TokenAmount>, currency: Address) -> Self {
        Self {
            price_per_token: price_per_token.into(),
            currency,
            start_timestamp: U256::ZERO,
            max_claimable_supply: U256::MAX,
            supply_claimed: U256::ZERO,
            quantity_limit_per_wallet: U256::MAX,
            merkle_root: B256::ZERO,
            metadata: String::new(),
        }
    }

    /// Currency address, unless it is the zero placeholder
    pub fn currency_address(&self) -> Option<Address> {
        (!self.currency.is_zero()).then_some(self.currency)
    }

    /// Tokens still claimable under this condition
    pub fn remaining_supply(&self) -> U256 {
        self.max_claimable_supply.saturating_sub(self.supply_claimed)
    }

    /// Whether the claim is restricted to an allowlist
    pub fn is_allowlisted(&self) -> bool {
        self.merkle_root != B256::ZERO
    }
}
