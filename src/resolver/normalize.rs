// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Smallest-unit price to human decimal

use crate::types::tokens::{NormalizedAmount, TokenAmount, TokenDecimals};

/// Convert a raw price into a display amount
///
/// Returns `None` unless both the amount and the decimals are known, or when
/// the decimals are too large to scale a U256. A zero amount is a free item and
/// yields `Some(0.0)`.
///
/// ```
/// use dropscan::{normalize, TokenAmount, TokenDecimals};
///
/// let price = normalize(Some(TokenAmount::from(2_500_000u64)), Some(TokenDecimals::USDC));
/// assert_eq!(price.map(|p| p.as_f64()), Some(2.5));
///
/// assert!(normalize(None, Some(TokenDecimals::STANDARD)).is_none());
/// ```
pub fn normalize(
    amount: Option<TokenAmount>,
    decimals: Option<TokenDecimals>,
) -> Option<NormalizedAmount> {
    let (amount, decimals) = (amount?, decimals?);
    if !decimals.is_scalable() {
        return None;
    }
    Some(amount.normalize(decimals))
}

/// Exact decimal label for a raw amount, trailing zeros trimmed
pub fn format_units(amount: TokenAmount, decimals: TokenDecimals) -> String {
    amount.format_units(decimals)
}
