// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Solidity interfaces of the contracts a drop page reads
//!
//! The `sol!` macro generates call types and, with `#[sol(rpc)]`, contract
//! instances with one method per function. Single return values are returned
//! directly from `.call()`.

use alloy_sol_types::sol;

use crate::types::claim::ClaimCondition;
use crate::types::tokens::TokenAmount;

sol! {
    /// Claim condition struct shared by ERC-721 and ERC-1155 drops.
    #[derive(Debug)]
    struct ClaimConditionData {
        uint256 startTimestamp;
        uint256 maxClaimableSupply;
        uint256 supplyClaimed;
        uint256 quantityLimitPerWallet;
        bytes32 merkleRoot;
        uint256 pricePerToken;
        address currency;
        string metadata;
    }

    /// ERC-165 introspection.
    #[sol(rpc)]
    interface IERC165 {
        function supportsInterface(bytes4 interfaceId) external view returns (bool);
    }

    /// Multi-phase ERC-721 drop.
    #[sol(rpc)]
    interface IDrop721 {
        function getActiveClaimConditionId() external view returns (uint256);
        function getClaimConditionById(uint256 conditionId) external view returns (ClaimConditionData memory condition);
    }

    /// Single-phase ERC-721 drop.
    #[sol(rpc)]
    interface IDropSinglePhase721 {
        function claimCondition() external view returns (
            uint256 startTimestamp,
            uint256 maxClaimableSupply,
            uint256 supplyClaimed,
            uint256 quantityLimitPerWallet,
            bytes32 merkleRoot,
            uint256 pricePerToken,
            address currency,
            string memory metadata
        );
    }

    /// Multi-phase ERC-1155 drop.
    #[sol(rpc)]
    interface IDrop1155 {
        function getActiveClaimConditionId(uint256 tokenId) external view returns (uint256);
        function getClaimConditionById(uint256 tokenId, uint256 conditionId) external view returns (ClaimConditionData memory condition);
        function uri(uint256 tokenId) external view returns (string memory);
    }

    /// Single-phase ERC-1155 drop.
    #[sol(rpc)]
    interface IDropSinglePhase1155 {
        function claimCondition(uint256 tokenId) external view returns (
            uint256 startTimestamp,
            uint256 maxClaimableSupply,
            uint256 supplyClaimed,
            uint256 quantityLimitPerWallet,
            bytes32 merkleRoot,
            uint256 pricePerToken,
            address currency,
            string memory metadata
        );
    }

    /// Contract-level metadata.
    #[sol(rpc)]
    interface IContractMetadata {
        function contractURI() external view returns (string memory);
        function name() external view returns (string memory);
    }

    /// ERC-20 metadata of a paying currency.
    #[sol(rpc)]
    interface IERC20Metadata {
        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function decimals() external view returns (uint8);
    }
}

impl From<ClaimConditionData> for ClaimCondition {
    fn from(data: ClaimConditionData) -> Self {
        Self {
            price_per_token: TokenAmount::new(data.pricePerToken),
            currency: data.currency,
            start_timestamp: data.startTimestamp,
            max_claimable_supply: data.maxClaimableSupply,
            supply_claimed: data.supplyClaimed,
            quantity_limit_per_wallet: data.quantityLimitPerWallet,
            merkle_root: data.merkleRoot,
            metadata: data.metadata,
        }
    }
}

impl From<IDropSinglePhase721::claimConditionReturn> for ClaimCondition {
    fn from(data: IDropSinglePhase721::claimConditionReturn) -> Self {
        Self {
            price_per_token: TokenAmount::new(data.pricePerToken),
            currency: data.currency,
            start_timestamp: data.startTimestamp,
            max_claimable_supply: data.maxClaimableSupply,
            supply_claimed: data.supplyClaimed,
            quantity_limit_per_wallet: data.quantityLimitPerWallet,
            merkle_root: data.merkleRoot,
            metadata: data.metadata,
        }
    }
}

impl From<IDropSinglePhase1155::claimConditionReturn> for ClaimCondition {
    fn from(data: IDropSinglePhase1155::claimConditionReturn) -> Self {
        Self {
            price_per_token: TokenAmount::new(data.pricePerToken),
            currency: data.currency,
            start_timestamp: data.startTimestamp,
            max_claimable_supply: data.maxClaimableSupply,
            supply_claimed: data.supplyClaimed,
            quantity_limit_per_wallet: data.quantityLimitPerWallet,
            merkle_root: data.merkleRoot,
            metadata: data.metadata,
        }
    }
}
