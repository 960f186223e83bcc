// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Contract references

use alloy_chains::NamedChain;
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// A deployed contract on a specific chain
///
/// Created once from static configuration and shared read-only by every query.
///
/// # Examples
///
/// ```
/// use alloy_chains::NamedChain;
/// use alloy_primitives::address;
/// use dropscan::ContractRef;
///
/// let drop = ContractRef::new(
///     address!("CD4C4726c74436B28E6Af18aD84C63cA457c9273"),
///     NamedChain::Avalanche,
/// );
/// assert_eq!(drop.chain_id(), 43114);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContractRef {
    /// Contract address
    pub address: Address,
    /// Chain the contract is deployed on
    pub chain: NamedChain,
}

impl ContractRef {
    /// Create a new contract reference
    pub const fn new(address: Address, chain: NamedChain) -> Self {
        Self { address, chain }
    }

    /// Reference another contract on the same chain
    ///
    /// Used to build the currency contract from a claim condition's currency address.
    pub const fn sibling(&self, address: Address) -> Self {
        Self {
            address,
            chain: self.chain,
        }
    }

    /// Numeric chain id
    pub fn chain_id(&self) -> u64 {
        self.chain as u64
    }
}

impl std::fmt::Display for ContractRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.address, self.chain)
    }
}
