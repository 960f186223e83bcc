// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! [`ChainReader`] backed by an alloy provider

use std::future::Future;
use std::time::Duration;

use alloy_primitives::{Address, U256};
use alloy_provider::{Provider, RootProvider};
use async_trait::async_trait;
use tracing::{debug, warn, Instrument};

use super::contracts::{
    IContractMetadata, IDrop1155, IDrop721, IDropSinglePhase1155, IDropSinglePhase721,
    IERC165, IERC20Metadata,
};
use super::uri::{expand_token_uri, MetadataLoader};
use super::{ChainReader, QueryKind};
use crate::config::DropscanConfig;
use crate::errors::{GatewayError, RpcError};
use crate::provider::{create_http_provider, ProviderConfig};
use crate::spans;
use crate::types::claim::ClaimCondition;
use crate::types::contract::ContractRef;
use crate::types::currency::CurrencyMetadata;
use crate::types::metadata::ItemMetadata;
use crate::types::standard::InterfaceId;

/// Reads drop contracts through an alloy [`Provider`]
///
/// Every contract call is bounded by the configured RPC timeout; retries are
/// left to the transport (see [`RetryLayer`](crate::transport::RetryLayer)).
/// Claim conditions are read from multi-phase drops first, falling back to the
/// single-phase `claimCondition()` layout when the contract reverts.
///
/// # Example
///
/// ```rust,ignore
/// use alloy_chains::NamedChain;
/// use dropscan::{AlloyChainReader, DropscanConfig};
///
/// let config = DropscanConfig::default();
/// let reader = AlloyChainReader::connect(&config, NamedChain::Avalanche)?;
/// ```
#[derive(Debug, Clone)]
pub struct AlloyChainReader<P> {
    provider: P,
    timeout: Duration,
    metadata: MetadataLoader,
}

impl AlloyChainReader<RootProvider> {
    /// Build an HTTP provider for `chain` from the configuration and wrap it
    ///
    /// # Errors
    ///
    /// Returns [`RpcError::ProviderUrlInvalid`] if no endpoint is configured for
    /// the chain or the endpoint cannot be parsed.
    pub fn connect(
        config: &DropscanConfig,
        chain: alloy_chains::NamedChain,
    ) -> Result<Self, RpcError> {
        let url = config.get_rpc_url(chain).ok_or_else(|| {
            RpcError::ProviderUrlInvalid(format!("no RPC URL configured for {chain}"))
        })?;

        let provider = create_http_provider(
            ProviderConfig::new(url)
                .with_max_retries(config.max_retries)
                .with_logging(config.rpc_logging),
        )?;

        Ok(Self::new(provider, config.get_rpc_timeout(chain), config))
    }
}

impl<P> AlloyChainReader<P>
where
    P: Provider + Send + Sync,
{
    /// Wrap an existing provider
    pub fn new(provider: P, timeout: Duration, config: &DropscanConfig) -> Self {
        Self {
            provider,
            timeout,
            metadata: MetadataLoader::new(config.ipfs_gateway.clone(), timeout),
        }
    }

    /// Run one contract call under the timeout and classify its error
    async fn call<T, F>(
        &self,
        operation: &'static str,
        address: Address,
        call: F,
    ) -> Result<T, RpcError>
    where
        F: Future<Output = Result<T, alloy_contract::Error>>,
    {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(RpcError::from_contract_error(operation, address, e)),
            Err(_) => Err(RpcError::timeout(operation, self.timeout)),
        }
    }

    async fn multi_phase_721(&self, contract: &ContractRef) -> Result<ClaimCondition, RpcError> {
        let drop = IDrop721::new(contract.address, &self.provider);
        let condition_id = self
            .call("getActiveClaimConditionId", contract.address, async {
                drop.getActiveClaimConditionId().call().await
            })
            .await?;
        let condition = self
            .call("getClaimConditionById", contract.address, async {
                drop.getClaimConditionById(condition_id).call().await
            })
            .await?;
        Ok(condition.into())
    }

    async fn single_phase_721(&self, contract: &ContractRef) -> Result<ClaimCondition, RpcError> {
        let drop = IDropSinglePhase721::new(contract.address, &self.provider);
        let condition = self
            .call("claimCondition", contract.address, async {
                drop.claimCondition().call().await
            })
            .await?;
        Ok(condition.into())
    }

    async fn multi_phase_1155(
        &self,
        contract: &ContractRef,
        token_id: U256,
    ) -> Result<ClaimCondition, RpcError> {
        let drop = IDrop1155::new(contract.address, &self.provider);
        let condition_id = self
            .call("getActiveClaimConditionId", contract.address, async {
                drop.getActiveClaimConditionId(token_id).call().await
            })
            .await?;
        let condition = self
            .call("getClaimConditionById", contract.address, async {
                drop.getClaimConditionById(token_id, condition_id)
                    .call()
                    .await
            })
            .await?;
        Ok(condition.into())
    }

    async fn single_phase_1155(
        &self,
        contract: &ContractRef,
        token_id: U256,
    ) -> Result<ClaimCondition, RpcError> {
        let drop = IDropSinglePhase1155::new(contract.address, &self.provider);
        let condition = self
            .call("claimCondition", contract.address, async {
                drop.claimCondition(token_id).call().await
            })
            .await?;
        Ok(condition.into())
    }
}

/// Use the multi-phase result unless it reverted, then try single-phase
fn prefer_multi_phase(
    multi: Result<ClaimCondition, RpcError>,
    contract: &ContractRef,
) -> Option<Result<ClaimCondition, RpcError>> {
    match multi {
        Err(e) if e.is_call_reverted() => {
            debug!(
                contract = %contract.address,
                error = %e,
                "Multi-phase claim condition reverted, trying single-phase layout"
            );
            None
        }
        other => Some(other),
    }
}

#[async_trait]
impl<P> ChainReader for AlloyChainReader<P>
where
    P: Provider + Send + Sync,
{
    async fn supports_interface(
        &self,
        contract: &ContractRef,
        interface_id: InterfaceId,
    ) -> Result<bool, GatewayError> {
        let span = spans::chain_read(&QueryKind::SupportsInterface(interface_id), contract);
        async {
            let erc165 = IERC165::new(contract.address, &self.provider);
            let supported = self
                .call("supportsInterface", contract.address, async {
                    erc165.supportsInterface(interface_id).call().await
                })
                .await?;
            Ok::<_, GatewayError>(supported)
        }
        .instrument(span)
        .await
    }

    async fn erc721_claim_condition(
        &self,
        contract: &ContractRef,
    ) -> Result<ClaimCondition, GatewayError> {
        let span = spans::chain_read(&QueryKind::Erc721ClaimCondition, contract);
        async {
            if let Some(result) = prefer_multi_phase(self.multi_phase_721(contract).await, contract)
            {
                return Ok(result?);
            }
            Ok::<_, GatewayError>(self.single_phase_721(contract).await?)
        }
        .instrument(span)
        .await
    }

    async fn erc1155_claim_condition(
        &self,
        contract: &ContractRef,
        token_id: U256,
    ) -> Result<ClaimCondition, GatewayError> {
        let span = spans::chain_read(&QueryKind::Erc1155ClaimCondition { token_id }, contract);
        async {
            if let Some(result) =
                prefer_multi_phase(self.multi_phase_1155(contract, token_id).await, contract)
            {
                return Ok(result?);
            }
            Ok::<_, GatewayError>(self.single_phase_1155(contract, token_id).await?)
        }
        .instrument(span)
        .await
    }

    async fn currency_metadata(
        &self,
        currency: &ContractRef,
    ) -> Result<CurrencyMetadata, GatewayError> {
        let span = spans::chain_read(&QueryKind::CurrencyMetadata, currency);
        async {
            let token = IERC20Metadata::new(currency.address, &self.provider);
            let (decimals, symbol, name) = futures::join!(
                self.call("decimals", currency.address, async {
                    token.decimals().call().await
                }),
                self.call("symbol", currency.address, async {
                    token.symbol().call().await
                }),
                self.call("name", currency.address, async { token.name().call().await }),
            );

            // name() is optional in ERC-20
            let name = name.unwrap_or_else(|e| {
                debug!(currency = %currency.address, error = %e, "Currency has no name()");
                String::new()
            });

            Ok::<_, GatewayError>(CurrencyMetadata::new(symbol?, decimals?).with_name(name))
        }
        .instrument(span)
        .await
    }

    async fn contract_metadata(
        &self,
        contract: &ContractRef,
    ) -> Result<ItemMetadata, GatewayError> {
        let span = spans::chain_read(&QueryKind::ContractMetadata, contract);
        async {
            let metadata_contract = IContractMetadata::new(contract.address, &self.provider);
            let (uri, name) = futures::join!(
                self.call("contractURI", contract.address, async {
                    metadata_contract.contractURI().call().await
                }),
                self.call("name", contract.address, async {
                    metadata_contract.name().call().await
                }),
            );

            let document = match uri {
                Ok(uri) if !uri.is_empty() => match self.metadata.load(&uri).await {
                    Ok(document) => Some(document),
                    Err(e) => {
                        warn!(contract = %contract.address, uri = %uri, error = %e, "Failed to load contract metadata document");
                        None
                    }
                },
                Ok(_) => None,
                Err(e) => {
                    debug!(contract = %contract.address, error = %e, "Contract has no contractURI()");
                    None
                }
            };

            match (document, name) {
                (Some(mut document), name) => {
                    if document.name.is_empty() {
                        document.name = name.unwrap_or_default();
                    }
                    Ok(document)
                }
                (None, Ok(name)) => Ok(ItemMetadata::named(name)),
                (None, Err(e)) => Err(GatewayError::from(e)),
            }
        }
        .instrument(span)
        .await
    }

    async fn token_metadata(
        &self,
        contract: &ContractRef,
        token_id: U256,
    ) -> Result<ItemMetadata, GatewayError> {
        let span = spans::chain_read(&QueryKind::TokenMetadata { token_id }, contract);
        async {
            let drop = IDrop1155::new(contract.address, &self.provider);
            let template = self
                .call("uri", contract.address, async {
                    drop.uri(token_id).call().await
                })
                .await?;

            let uri = expand_token_uri(&template, token_id);
            Ok::<_, GatewayError>(self.metadata.load(&uri).await?)
        }
        .instrument(span)
        .await
    }
}
