// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known addresses and constants
//!
//! Centralizes the deployed contracts the buy and game pages point at, and the
//! sentinel values drop contracts use on-chain.

use alloy_primitives::{address, Address};

/// Deployed drop contracts
pub mod drops {
    use super::*;

    /// Item sold on the buy page (Avalanche C-Chain)
    ///
    /// Contract: 0xCD4C4726c74436B28E6Af18aD84C63cA457c9273
    pub const BUY_PAGE_DROP: Address = address!("cd4c4726c74436b28e6af18ad84c63ca457c9273");

    /// Reward token claimed after winning the grid game (Avalanche Fuji)
    ///
    /// Contract: 0x433F419A34D3B6ffCCb0fe3A736c8e88DB8a7363
    pub const GAME_REWARD_DROP: Address = address!("433f419a34d3b6ffccb0fe3a736c8e88db8a7363");

    /// Token id sold on the buy page
    pub const BUY_PAGE_ITEM_ID: u64 = 0;

    /// Token id minted as the game reward
    pub const GAME_REWARD_TOKEN_ID: u64 = 1;
}

/// Sentinel currency addresses used in claim conditions
pub mod currencies {
    use super::*;

    /// Claim conditions priced in the chain's native currency use this address
    ///
    /// Contract: 0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE
    pub const NATIVE_TOKEN: Address = address!("eeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee");
}

/// Default public IPFS gateway for `ipfs://` metadata URIs
pub const DEFAULT_IPFS_GATEWAY: &str = "https://ipfs.io/ipfs/";
