// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for off-chain item metadata.
//!
//! Contract and token metadata live behind a URI returned by the contract
//! (`contractURI()` or `uri(id)`). Fetching and decoding that document can fail
//! independently of the chain itself.

/// Errors that can occur while loading metadata JSON from a URI.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// The URI uses a scheme we cannot load (e.g. `ar://`).
    #[error("Unsupported metadata URI: {uri}")]
    UnsupportedUri {
        /// The offending URI
        uri: String,
    },

    /// HTTP request for the metadata document failed.
    #[error("Failed to fetch metadata from {url}")]
    FetchFailed {
        /// Resolved HTTP URL
        url: String,
        /// The underlying HTTP error
        #[source]
        source: reqwest::Error,
    },

    /// The document was fetched but is not the expected JSON shape.
    #[error("Invalid metadata JSON from {uri}")]
    InvalidJson {
        /// Source URI
        uri: String,
        /// The underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// A `data:` URI with a malformed payload.
    #[error("Invalid data URI: {details}")]
    InvalidDataUri {
        /// Details about the failure
        details: String,
    },
}

impl MetadataError {
    /// Create an `UnsupportedUri` error.
    pub fn unsupported_uri(uri: impl Into<String>) -> Self {
        MetadataError::UnsupportedUri { uri: uri.into() }
    }

    /// Create an `InvalidDataUri` error with details.
    pub fn invalid_data_uri(details: impl Into<String>) -> Self {
        MetadataError::InvalidDataUri {
            details: details.into(),
        }
    }
}
