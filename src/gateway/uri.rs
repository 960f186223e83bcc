// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Loading metadata documents from contract-provided URIs

use std::time::Duration;

use alloy_primitives::{hex, U256};
use base64::Engine;
use tracing::{debug, warn};

use crate::errors::MetadataError;
use crate::types::metadata::ItemMetadata;

const IPFS_SCHEME: &str = "ipfs://";
const DATA_SCHEME: &str = "data:";

/// Substitute the ERC-1155 `{id}` placeholder in a token URI
///
/// The id is rendered as 64 lowercase hex digits without a `0x` prefix.
///
/// ```
/// use alloy_primitives::U256;
/// use dropscan::expand_token_uri;
///
/// let uri = expand_token_uri("ipfs://Qm/{id}.json", U256::from(1));
/// assert_eq!(
///     uri,
///     "ipfs://Qm/0000000000000000000000000000000000000000000000000000000000000001.json"
/// );
/// ```
pub fn expand_token_uri(template: &str, token_id: U256) -> String {
    template.replace("{id}", &hex::encode(token_id.to_be_bytes::<32>()))
}

/// Fetches and decodes metadata JSON from `ipfs://`, `http(s)://` and `data:` URIs
#[derive(Debug, Clone)]
pub struct MetadataLoader {
    client: reqwest::Client,
    ipfs_gateway: String,
    /// Per-request timeout, on top of whatever the client enforces
    request_timeout: Option<Duration>,
}

enum Source {
    Http(String),
    Inline(Vec<u8>),
}

impl MetadataLoader {
    /// Create a loader that rewrites `ipfs://` onto `ipfs_gateway`
    pub fn new(ipfs_gateway: impl Into<String>, timeout: Duration) -> Self {
        let client = match reqwest::Client::builder().timeout(timeout).build() {
            Ok(client) => client,
            Err(e) => {
                warn!(error = %e, "Failed to build metadata HTTP client, using default client");
                reqwest::Client::new()
            }
        };
        let mut loader = Self::with_client(client, ipfs_gateway);
        loader.request_timeout = Some(timeout);
        loader
    }

    /// Create a loader around an existing HTTP client
    pub fn with_client(client: reqwest::Client, ipfs_gateway: impl Into<String>) -> Self {
        let mut ipfs_gateway = ipfs_gateway.into();
        if !ipfs_gateway.ends_with('/') {
            ipfs_gateway.push('/');
        }
        Self {
            client,
            ipfs_gateway,
            request_timeout: None,
        }
    }

    /// Rewrite an `ipfs://` URI onto the gateway; other URIs are returned unchanged
    pub fn gateway_url(&self, uri: &str) -> String {
        match uri.strip_prefix(IPFS_SCHEME) {
            Some(path) => {
                let path = path.strip_prefix("ipfs/").unwrap_or(path);
                format!("{}{}", self.ipfs_gateway, path)
            }
            None => uri.to_string(),
        }
    }

    /// Load an [`ItemMetadata`] document
    ///
    /// An `ipfs://` image in the document is rewritten onto the gateway so the
    /// rendering layer can display it directly.
    pub async fn load(&self, uri: &str) -> Result<ItemMetadata, MetadataError> {
        let bytes = match self.source(uri)? {
            Source::Inline(bytes) => bytes,
            Source::Http(url) => {
                debug!(url = %url, "Fetching metadata document");
                self.fetch(&url).await?
            }
        };

        let mut metadata: ItemMetadata =
            serde_json::from_slice(&bytes).map_err(|source| MetadataError::InvalidJson {
                uri: uri.to_string(),
                source,
            })?;
        metadata.image = self.gateway_url(&metadata.image);
        Ok(metadata)
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, MetadataError> {
        let fetch_failed = |source| MetadataError::FetchFailed {
            url: url.to_string(),
            source,
        };

        let mut request = self.client.get(url);
        if let Some(timeout) = self.request_timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(fetch_failed)?;

        let bytes = response.bytes().await.map_err(fetch_failed)?;
        Ok(bytes.to_vec())
    }

    fn source(&self, uri: &str) -> Result<Source, MetadataError> {
        if uri.starts_with(IPFS_SCHEME) {
            return Ok(Source::Http(self.gateway_url(uri)));
        }
        if uri.starts_with("https://") || uri.starts_with("http://") {
            return Ok(Source::Http(uri.to_string()));
        }
        if let Some(rest) = uri.strip_prefix(DATA_SCHEME) {
            return decode_data_uri(rest).map(Source::Inline);
        }
        Err(MetadataError::unsupported_uri(uri))
    }
}

/// Decode the part of a `data:` URI after the scheme
fn decode_data_uri(rest: &str) -> Result<Vec<u8>, MetadataError> {
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| MetadataError::invalid_data_uri("missing ',' separator"))?;

    if header.split(';').any(|param| param == "base64") {
        base64::engine::general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| MetadataError::invalid_data_uri(e.to_string()))
    } else {
        Ok(payload.as_bytes().to_vec())
    }
}
