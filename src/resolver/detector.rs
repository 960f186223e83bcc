// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! ERC-165 standard detection

use tracing::{debug, warn, Instrument};

use crate::gateway::ChainReader;
use crate::spans;
use crate::types::contract::ContractRef;
use crate::types::standard::{Capability, StandardFlags, TokenStandard};

/// Check one standard
///
/// A revert or undecodable answer means the contract does not conform and
/// yields [`Capability::Unsupported`]. Transport failures leave the answer
/// [`Capability::Unknown`]. Never fails.
pub async fn check_standard(
    reader: &dyn ChainReader,
    contract: &ContractRef,
    standard: TokenStandard,
) -> Capability {
    async {
        match reader
            .supports_interface(contract, standard.interface_id())
            .await
        {
            Ok(supported) => {
                debug!(supported, "Interface check answered");
                Capability::from(supported)
            }
            Err(e) if e.is_unsupported() => {
                debug!(error = %e, "Contract does not answer ERC-165, treating as unsupported");
                Capability::Unsupported
            }
            Err(e) => {
                warn!(error = %e, "Interface check failed");
                Capability::Unknown
            }
        }
    }
    .instrument(spans::check_standard(contract, standard))
    .await
}

/// Check both standards concurrently
pub async fn detect(reader: &dyn ChainReader, contract: &ContractRef) -> StandardFlags {
    let (erc721, erc1155) = futures::join!(
        check_standard(reader, contract, TokenStandard::Erc721),
        check_standard(reader, contract, TokenStandard::Erc1155),
    );
    StandardFlags { erc721, erc1155 }
}
