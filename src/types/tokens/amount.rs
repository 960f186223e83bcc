// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw token amount type

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use super::decimals::TokenDecimals;
use super::normalized::NormalizedAmount;

/// Raw token amount in the currency's smallest unit
///
/// Claim condition prices are stored on-chain this way (wei for AVAX, 10^-6
/// for USDC). Use [`normalize`](Self::normalize) for a display value and
/// [`format_units`](Self::format_units) for an exact label.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use dropscan::{TokenAmount, TokenDecimals};
///
/// // 1 AVAX in wei
/// let price = TokenAmount::new(U256::from(1_000_000_000_000_000_000u64));
/// assert_eq!(price.normalize(TokenDecimals::STANDARD).as_f64(), 1.0);
/// assert_eq!(price.format_units(TokenDecimals::STANDARD), "1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenAmount(U256);

impl TokenAmount {
    /// Zero token amount
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new token amount from U256
    pub const fn new(amount: U256) -> Self {
        Self(amount)
    }

    /// Get the inner U256 value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Normalize by token decimals: amount / 10^decimals
    ///
    /// The result is an f64, which is enough for display but not for exact
    /// on-chain arithmetic.
    pub fn normalize(&self, decimals: TokenDecimals) -> NormalizedAmount {
        // Convert U256 to f64 via string to handle large numbers
        let amount_str = self.0.to_string();
        let amount_f64 = amount_str.parse::<f64>().unwrap_or_else(|e| {
            tracing::warn!(
                amount = %self.0,
                error = %e,
                "Failed to parse token amount to f64, using 0.0"
            );
            0.0
        });

        NormalizedAmount::new(amount_f64 / decimals.divisor())
    }

    /// Format as an exact decimal string with trailing zeros removed
    ///
    /// Falls back to the raw integer when `decimals` is not scalable.
    pub fn format_units(&self, decimals: TokenDecimals) -> String {
        let places = decimals.as_u8();
        if places == 0 || !decimals.is_scalable() {
            return self.0.to_string();
        }

        let divisor = U256::from(10u64).pow(U256::from(places));
        let whole = self.0 / divisor;
        let fractional = self.0 % divisor;

        let fractional_str = format!("{:0>width$}", fractional.to_string(), width = places as usize);
        let trimmed = fractional_str.trim_end_matches('0');

        if trimmed.is_empty() {
            format!("{}", whole)
        } else {
            format!("{}.{}", whole, trimmed)
        }
    }
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for TokenAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
