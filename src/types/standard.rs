// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token standard families and capability flags

use alloy_primitives::{fixed_bytes, FixedBytes};
use serde::{Deserialize, Serialize};

/// ERC-165 interface identifier
pub type InterfaceId = FixedBytes<4>;

/// Token standard family a drop contract can implement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenStandard {
    /// Single-collection drops; claim conditions are per contract
    Erc721,
    /// Multi-item drops; claim conditions and metadata are per token id
    Erc1155,
}

impl TokenStandard {
    /// ERC-165 interface id for ERC-721
    pub const ERC721_INTERFACE_ID: InterfaceId = fixed_bytes!("80ac58cd");

    /// ERC-165 interface id for ERC-1155
    pub const ERC1155_INTERFACE_ID: InterfaceId = fixed_bytes!("d9b67a26");

    /// The ERC-165 interface id queried to detect this standard
    pub const fn interface_id(self) -> InterfaceId {
        match self {
            TokenStandard::Erc721 => Self::ERC721_INTERFACE_ID,
            TokenStandard::Erc1155 => Self::ERC1155_INTERFACE_ID,
        }
    }

    /// Whether queries for this standard need a token id
    pub const fn is_per_item(self) -> bool {
        matches!(self, TokenStandard::Erc1155)
    }

    /// Short name used in logs and spans
    pub const fn name(self) -> &'static str {
        match self {
            TokenStandard::Erc721 => "erc721",
            TokenStandard::Erc1155 => "erc1155",
        }
    }
}

impl std::fmt::Display for TokenStandard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Tri-state answer to "does this contract implement standard X?"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// No answer yet, or the check failed in transport
    #[default]
    Unknown,
    /// The contract reported support
    Supported,
    /// The contract reported no support, or does not implement ERC-165
    Unsupported,
}

impl Capability {
    /// Only a definite yes counts; unknown gates queries exactly like no.
    pub const fn is_supported(self) -> bool {
        matches!(self, Capability::Supported)
    }

    /// Whether the check has produced an answer
    pub const fn is_known(self) -> bool {
        !matches!(self, Capability::Unknown)
    }
}

impl From<bool> for Capability {
    fn from(value: bool) -> Self {
        if value {
            Capability::Supported
        } else {
            Capability::Unsupported
        }
    }
}

/// Capability flags for both standard families
///
/// The type does not make the flags mutually exclusive. A well-formed drop
/// reports at most one as supported; when both are, ERC-1155 wins (see
/// [`StandardFlags::preferred`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardFlags {
    /// ERC-721 check result
    pub erc721: Capability,
    /// ERC-1155 check result
    pub erc1155: Capability,
}

impl StandardFlags {
    /// Flag for one family
    pub const fn get(&self, standard: TokenStandard) -> Capability {
        match standard {
            TokenStandard::Erc721 => self.erc721,
            TokenStandard::Erc1155 => self.erc1155,
        }
    }

    /// Set the flag for one family, returning whether it changed
    pub fn set(&mut self, standard: TokenStandard, capability: Capability) -> bool {
        let slot = match standard {
            TokenStandard::Erc721 => &mut self.erc721,
            TokenStandard::Erc1155 => &mut self.erc1155,
        };
        let changed = *slot != capability;
        *slot = capability;
        changed
    }

    /// Whether at least one check has answered
    pub const fn any_known(&self) -> bool {
        self.erc721.is_known() || self.erc1155.is_known()
    }

    /// Whether at least one family is supported
    pub const fn any_supported(&self) -> bool {
        self.erc721.is_supported() || self.erc1155.is_supported()
    }

    /// The family whose data should be displayed, ERC-1155 first
    pub const fn preferred(&self) -> Option<TokenStandard> {
        if self.erc1155.is_supported() {
            Some(TokenStandard::Erc1155)
        } else if self.erc721.is_supported() {
            Some(TokenStandard::Erc721)
        } else {
            None
        }
    }
}
