// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Normalized (human-readable) token amount type

use serde::{Deserialize, Serialize};

/// Token amount normalized by decimals (human-readable)
///
/// This is a price or quantity after dividing by 10^decimals: 1.5 AVAX rather
/// than 1.5e18 wei, 2.5 USDC rather than 2500000.
///
/// # Invariant
///
/// Normalized amounts are never negative. Negative inputs are clamped to zero.
///
/// # Examples
///
/// ```
/// use dropscan::NormalizedAmount;
///
/// let price = NormalizedAmount::new(2.5);
/// assert_eq!(price.as_f64(), 2.5);
/// assert_eq!(NormalizedAmount::new(-5.0).as_f64(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedAmount(f64);

impl NormalizedAmount {
    /// Zero normalized amount
    pub const ZERO: Self = Self(0.0);

    /// Create a new normalized amount, clamping negatives to zero
    pub fn new(amount: f64) -> Self {
        Self(amount.max(0.0))
    }

    /// Get the inner f64 value
    pub const fn as_f64(&self) -> f64 {
        self.0
    }

    /// Check if amount is effectively zero (within epsilon)
    ///
    /// A zero price is a free item, which is a valid price to display.
    pub fn is_zero(&self) -> bool {
        self.0.abs() < f64::EPSILON
    }
}

impl From<f64> for NormalizedAmount {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for NormalizedAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Shortest form that reads back as the same f64
        write!(f, "{}", self.0)
    }
}
