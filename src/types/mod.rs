// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for the drop data model.
//!
//! - Contract references and token standard flags
//! - Claim conditions, currency metadata and item metadata
//! - Token amounts and decimals

pub mod claim;
pub mod contract;
pub mod currency;
pub mod metadata;
pub mod standard;
pub mod tokens;

// Note: Public types are re-exported from lib.rs, not here
