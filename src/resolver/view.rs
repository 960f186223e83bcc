// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! View model handed to the rendering layer

use alloy_primitives::U256;
use serde::Serialize;

use crate::types::standard::TokenStandard;
use crate::types::tokens::NormalizedAmount;

use super::normalize::format_units;
use super::state::{ResolutionState, Stage};

/// Everything a buy page renders for one drop
///
/// Composed from a [`ResolutionState`] at any stage. Unresolved text fields are
/// empty strings and an unresolved price is `None`, so a partial view is always
/// safe to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedPriceView {
    /// Item name, or the contract name for ERC-721 drops
    pub display_name: String,
    /// Item or contract description
    pub description: String,
    /// Contract image
    pub image: String,
    /// Symbol of the paying currency
    pub currency_symbol: String,
    /// Price of one token in whole currency units
    pub price_per_token: Option<NormalizedAmount>,
    /// Exact price with symbol, e.g. `2.5 USDC`
    pub price_label: Option<String>,
    /// Whether the drop is an ERC-1155 contract
    pub is_erc1155: bool,
    /// Item id the view was composed for
    pub item_id: U256,
    /// Family whose condition is displayed
    pub standard: Option<TokenStandard>,
    /// Resolution progress when the view was composed
    pub stage: Stage,
}

impl ResolvedPriceView {
    /// Compose a view from the current state. Never fails.
    pub fn compose(state: &ResolutionState, item_id: U256) -> Self {
        let is_erc1155 = state.flags.erc1155.is_supported();

        let item = if is_erc1155 {
            state.token_metadata.as_ref()
        } else {
            state.contract_metadata.as_ref()
        };
        let image = state
            .contract_metadata
            .as_ref()
            .map(|metadata| metadata.image.clone())
            .unwrap_or_default();

        let currency = state.matched_currency();
        let price_per_token = state.price();
        let price_label = match (state.merged_condition(), currency, price_per_token) {
            (Some(condition), Some(currency), Some(_)) => Some(format!(
                "{} {}",
                format_units(condition.price_per_token, currency.decimals),
                currency.symbol
            )),
            _ => None,
        };

        Self {
            display_name: item.map(|m| m.name.clone()).unwrap_or_default(),
            description: item.map(|m| m.description.clone()).unwrap_or_default(),
            image,
            currency_symbol: currency.map(|c| c.symbol.clone()).unwrap_or_default(),
            price_per_token,
            price_label,
            is_erc1155,
            item_id,
            standard: state.flags.preferred(),
            stage: state.stage(),
        }
    }

    /// Whether the price is ready to show
    pub fn is_priced(&self) -> bool {
        self.price_per_token.is_some()
    }

    /// Whether the item is free to claim
    pub fn is_free(&self) -> bool {
        self.price_per_token.is_some_and(|price| price.is_zero())
    }
}
