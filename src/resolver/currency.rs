// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Paying currency resolution

use alloy_primitives::Address;
use tracing::{debug, warn, Instrument};

use crate::config::constants::currencies::NATIVE_TOKEN;
use crate::gateway::ChainReader;
use crate::spans;
use crate::types::contract::ContractRef;
use crate::types::currency::CurrencyMetadata;

use super::state::ResolvedCurrency;

/// How a claim condition's currency address is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencySource {
    /// No currency to resolve
    Absent,
    /// The native-currency sentinel, resolved without a read
    Native,
    /// An ERC-20 contract on the drop's chain
    Erc20(Address),
}

impl CurrencySource {
    /// Classify a currency address; the zero address counts as absent
    pub fn classify(address: Option<Address>) -> Self {
        match address {
            None => Self::Absent,
            Some(address) if address.is_zero() => Self::Absent,
            Some(address) if address == NATIVE_TOKEN => Self::Native,
            Some(address) => Self::Erc20(address),
        }
    }
}

/// Resolve display metadata for the currency at `address`
///
/// `drop` supplies the chain. Returns `None` when there is nothing to resolve,
/// the read fails, or the token reports more decimals than a U256 can scale.
pub async fn resolve_currency(
    reader: &dyn ChainReader,
    drop: &ContractRef,
    address: Option<Address>,
) -> Option<ResolvedCurrency> {
    let token = match CurrencySource::classify(address) {
        CurrencySource::Absent => {
            debug!("No currency to resolve");
            return None;
        }
        CurrencySource::Native => {
            return Some(ResolvedCurrency {
                address: NATIVE_TOKEN,
                metadata: CurrencyMetadata::native(drop.chain),
            });
        }
        CurrencySource::Erc20(token) => token,
    };

    async {
        let metadata = match reader.currency_metadata(&drop.sibling(token)).await {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!(error = %e, "Failed to read currency metadata");
                return None;
            }
        };

        if !metadata.decimals.is_scalable() {
            warn!(
                decimals = %metadata.decimals,
                symbol = %metadata.symbol,
                "Currency reports unscalable decimals, leaving price unresolved"
            );
            return None;
        }

        debug!(symbol = %metadata.symbol, decimals = %metadata.decimals, "Resolved currency");
        Some(ResolvedCurrency {
            address: token,
            metadata,
        })
    }
    .instrument(spans::resolve_currency(token))
    .await
}
