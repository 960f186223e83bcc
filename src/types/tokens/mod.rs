// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for token-related values
//!
//! # Type Relationships
//!
//! ```text
//! TokenAmount (U256, raw price from the claim condition)
//!     |
//!     | normalize(TokenDecimals)
//!     ↓
//! NormalizedAmount (f64, human-readable price)
//! ```

mod amount;
mod decimals;
mod normalized;

pub use amount::TokenAmount;
pub use decimals::TokenDecimals;
pub use normalized::NormalizedAmount;
