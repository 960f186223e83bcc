// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Currency decimal precision type

use serde::{Deserialize, Serialize};

/// Decimal precision of a paying currency
///
/// The number of decimal places between a currency's smallest on-chain unit and
/// its human-scale unit:
/// - native AVAX / ETH: 18 decimals
/// - USDC: 6 decimals
///
/// # Examples
///
/// ```
/// use dropscan::TokenDecimals;
///
/// assert_eq!(TokenDecimals::STANDARD.as_u8(), 18);
/// assert_eq!(TokenDecimals::USDC.as_u8(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDecimals(u8);

impl TokenDecimals {
    /// Largest precision whose scale factor 10^decimals fits in a U256
    pub const MAX_SCALABLE: u8 = 77;

    /// Standard decimals for native currencies and most ERC-20 tokens (18)
    pub const STANDARD: Self = Self(18);

    /// USDC decimals (6)
    pub const USDC: Self = Self(6);

    /// Create a new decimal precision value
    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Check whether amounts in this precision can be scaled exactly
    ///
    /// ERC-20 allows any `uint8`, but anything above 77 decimals cannot be
    /// represented as a U256 divisor. A currency reporting such a value is
    /// treated as malformed and never priced.
    pub const fn is_scalable(&self) -> bool {
        self.0 <= Self::MAX_SCALABLE
    }

    /// Calculate the divisor for normalization: 10^decimals
    pub fn divisor(&self) -> f64 {
        10_f64.powi(self.0 as i32)
    }
}

impl From<u8> for TokenDecimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_decimals_constants() {
        assert_eq!(TokenDecimals::STANDARD.as_u8(), 18);
        assert_eq!(TokenDecimals::USDC.as_u8(), 6);
    }

    #[test]
    fn test_token_decimals_scalable() {
        assert!(TokenDecimals::new(0).is_scalable());
        assert!(TokenDecimals::new(18).is_scalable());
        assert!(TokenDecimals::new(77).is_scalable());
        assert!(!TokenDecimals::new(78).is_scalable());
        assert!(!TokenDecimals::new(255).is_scalable());
    }

    #[test]
    fn test_token_decimals_divisor() {
        assert_eq!(TokenDecimals::USDC.divisor(), 1_000_000.0);
        assert_eq!(TokenDecimals::new(0).divisor(), 1.0);
        assert_eq!(
            TokenDecimals::STANDARD.divisor(),
            1_000_000_000_000_000_000.0
        );
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(format!("{}", TokenDecimals::STANDARD), "18 decimals");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&TokenDecimals::USDC).unwrap();
        assert_eq!(json, "6");
        let deserialized: TokenDecimals = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, TokenDecimals::USDC);
    }
}
