// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Paying currency metadata

use alloy_chains::NamedChain;
use serde::{Deserialize, Serialize};

use super::tokens::TokenDecimals;

/// Display metadata for the currency a drop is paid in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyMetadata {
    /// Ticker symbol, e.g. "AVAX" or "USDC"
    pub symbol: String,
    /// Full name; empty when the token does not expose one
    pub name: String,
    /// Decimal precision of the smallest unit
    pub decimals: TokenDecimals,
}

impl CurrencyMetadata {
    /// Create currency metadata with an empty name
    pub fn new(symbol: impl Into<String>, decimals: impl Into<TokenDecimals>) -> Self {
        Self {
            symbol: symbol.into(),
            name: String::new(),
            decimals: decimals.into(),
        }
    }

    /// Set the full name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Metadata of a chain's native currency (always 18 decimals)
    ///
    /// Falls back to "ETH" for chains alloy has no symbol for.
    pub fn native(chain: NamedChain) -> Self {
        let symbol = chain.native_currency_symbol().unwrap_or("ETH");
        Self::new(symbol, TokenDecimals::STANDARD).with_name(symbol)
    }
}
