// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Provider factory

use alloy_network::Ethereum;
use alloy_provider::{ProviderBuilder, RootProvider};
use alloy_rpc_client::ClientBuilder;

use crate::errors::RpcError;
use crate::transport::{LoggingLayer, RetryLayer};

use super::config::ProviderConfig;

/// Provider type returned by [`create_http_provider`]
pub type DropProvider = RootProvider<Ethereum>;

/// Create an HTTP provider with the given configuration
///
/// Requests pass through a [`RetryLayer`] and, when logging is enabled, a
/// [`LoggingLayer`] outside it so each logical call gets one span.
///
/// # Errors
///
/// Returns [`RpcError::ProviderUrlInvalid`] if the URL cannot be parsed.
pub fn create_http_provider(config: ProviderConfig) -> Result<DropProvider, RpcError> {
    let url: url::Url = config
        .url
        .parse()
        .map_err(|e| RpcError::ProviderUrlInvalid(format!("{}: {e}", config.url)))?;

    let retry = RetryLayer::with_max_retries(config.max_retries);

    let provider = if config.logging_enabled {
        let client = ClientBuilder::default()
            .layer(LoggingLayer::new())
            .layer(retry)
            .http(url);
        ProviderBuilder::new()
            .disable_recommended_fillers()
            .network::<Ethereum>()
            .connect_client(client)
    } else {
        let client = ClientBuilder::default().layer(retry).http(url);
        ProviderBuilder::new()
            .disable_recommended_fillers()
            .network::<Ethereum>()
            .connect_client(client)
    };

    Ok(provider)
}
