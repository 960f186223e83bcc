// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error type returned by every [`ChainReader`](crate::ChainReader) read.

use super::{MetadataError, RpcError};

/// Errors surfaced by the chain read gateway.
///
/// The resolver never lets these reach the view: each stage logs the error and
/// leaves its slot absent. [`GatewayError::is_unsupported`] is what lets the
/// standard detector turn a failed interface check into a definite "no".
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// A contract call failed.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// Off-chain metadata could not be loaded.
    #[error("Metadata error: {0}")]
    Metadata(#[from] MetadataError),
}

impl GatewayError {
    /// Whether the contract itself answered "not supported".
    ///
    /// True for reverted or undecodable calls; false for transport failures,
    /// timeouts and metadata errors, whose outcome is still unknown.
    pub fn is_unsupported(&self) -> bool {
        match self {
            GatewayError::Rpc(e) => e.is_call_reverted(),
            GatewayError::Metadata(_) => false,
        }
    }
}
