// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Claim condition fetching, gated per token family

use alloy_primitives::U256;
use tracing::{debug, warn, Instrument};

use crate::gateway::ChainReader;
use crate::spans;
use crate::types::claim::ClaimCondition;
use crate::types::contract::ContractRef;
use crate::types::standard::{Capability, TokenStandard};

/// Fetch the active claim condition through the family-correct query
///
/// Nothing is read unless `capability` is [`Capability::Supported`]. ERC-721
/// conditions are per contract; ERC-1155 conditions are read for `item_id`.
/// Failures are logged and reported as absent.
pub async fn fetch_condition(
    reader: &dyn ChainReader,
    contract: &ContractRef,
    standard: TokenStandard,
    capability: Capability,
    item_id: U256,
) -> Option<ClaimCondition> {
    if !capability.is_supported() {
        debug!(
            contract = %contract.address,
            standard = standard.name(),
            ?capability,
            "Skipping claim condition query"
        );
        return None;
    }

    let token_id = standard.is_per_item().then_some(item_id);
    async {
        let result = match standard {
            TokenStandard::Erc721 => reader.erc721_claim_condition(contract).await,
            TokenStandard::Erc1155 => reader.erc1155_claim_condition(contract, item_id).await,
        };

        match result {
            Ok(condition) => {
                debug!(
                    price = %condition.price_per_token,
                    currency = %condition.currency,
                    "Fetched claim condition"
                );
                Some(condition)
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch claim condition");
                None
            }
        }
    }
    .instrument(spans::fetch_claim_condition(contract, standard, token_id))
    .await
}

/// Pick the condition to display, ERC-1155 first
///
/// A present condition wins even when its price is zero.
pub fn merge_conditions<'a>(
    erc721: Option<&'a ClaimCondition>,
    erc1155: Option<&'a ClaimCondition>,
) -> Option<&'a ClaimCondition> {
    erc1155.or(erc721)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::stub::{Outcome, StubReader};
    use alloy_chains::NamedChain;
    use alloy_primitives::Address;

    fn contract() -> ContractRef {
        ContractRef::new(Address::repeat_byte(0xcd), NamedChain::Avalanche)
    }

    #[test]
    fn test_merge_prefers_erc1155_even_when_free() {
        let paid = ClaimCondition::new(10u64, Address::ZERO);
        let free = ClaimCondition::new(0u64, Address::ZERO);
        assert_eq!(merge_conditions(Some(&paid), Some(&free)), Some(&free));
        assert_eq!(merge_conditions(Some(&paid), None), Some(&paid));
        assert_eq!(merge_conditions(None, None), None);
    }

    #[tokio::test]
    async fn test_query_gated_on_capability() {
        let reader = StubReader::new(Outcome::Answer);
        for capability in [Capability::Unknown, Capability::Unsupported] {
            for standard in [TokenStandard::Erc721, TokenStandard::Erc1155] {
                let condition =
                    fetch_condition(&reader, &contract(), standard, capability, U256::ZERO).await;
                assert!(condition.is_none());
            }
        }
        assert_eq!(reader.reads(), 0);
    }

    #[tokio::test]
    async fn test_supported_family_is_read() {
        let reader = StubReader::new(Outcome::Answer);
        let condition = fetch_condition(
            &reader,
            &contract(),
            TokenStandard::Erc1155,
            Capability::Supported,
            U256::ZERO,
        )
        .await;
        assert_eq!(condition, Some(reader.condition.clone()));
        assert_eq!(reader.reads(), 1);
    }

    #[tokio::test]
    async fn test_failed_read_is_absent() {
        let reader = StubReader::new(Outcome::Offline);
        let condition = fetch_condition(
            &reader,
            &contract(),
            TokenStandard::Erc721,
            Capability::Supported,
            U256::ZERO,
        )
        .await;
        assert!(condition.is_none());
        assert_eq!(reader.reads(), 1);
    }
}
