// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Shared RPC error types for contract reads.
//!
//! These errors capture what can go wrong when a read-only contract call is sent
//! through an alloy provider. The important split is between a call the node
//! answered with an execution error (the contract does not implement the
//! function, or reverted) and a call that never got an answer at all.

use alloy_json_rpc::ErrorPayload;
use alloy_primitives::Address;
use std::time::Duration;

/// JSON-RPC error code geth uses for a revert carrying return data
const EXECUTION_REVERTED_CODE: i64 = 3;

/// Errors that can occur during a contract read.
///
/// # Examples
///
/// ```rust
/// use dropscan::RpcError;
///
/// let error = RpcError::Timeout {
///     operation: "decimals".to_string(),
///     timeout: std::time::Duration::from_secs(30),
/// };
/// assert!(!error.is_call_reverted());
/// ```
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// The node executed the call and it reverted, or the returned data could not
    /// be decoded as the expected ABI type.
    ///
    /// For capability checks this means the contract does not conform to the
    /// interface being queried, which is an answer rather than a failure.
    #[error("Call {operation} on {address} reverted or returned undecodable data")]
    CallReverted {
        /// Name of the contract function that was called
        operation: String,
        /// Contract that was called
        address: Address,
        /// The underlying contract error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to reach the node, the node refused the request, or the
    /// transport gave up.
    ///
    /// Network errors, HTTP failures, rate limits and other JSON-RPC error
    /// responses that are not execution reverts end up here.
    #[error("Chain connection failed during {operation}")]
    ChainConnectionFailed {
        /// Description of the operation that failed
        operation: String,
        /// The underlying error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The call did not complete within the configured timeout.
    #[error("{operation} timed out after {timeout:?}")]
    Timeout {
        /// Description of the operation that timed out
        operation: String,
        /// The timeout that elapsed
        timeout: Duration,
    },

    /// The RPC endpoint URL could not be parsed.
    #[error("Invalid provider URL: {0}")]
    ProviderUrlInvalid(String),
}

impl RpcError {
    /// Helper to create a `CallReverted` error from any error type.
    pub fn call_reverted(
        operation: impl Into<String>,
        address: Address,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::CallReverted {
            operation: operation.into(),
            address,
            source: Box::new(source),
        }
    }

    /// Helper to create a `ChainConnectionFailed` error from any error type.
    pub fn chain_connection_failed(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::ChainConnectionFailed {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create a `Timeout` error.
    pub fn timeout(operation: impl Into<String>, timeout: Duration) -> Self {
        RpcError::Timeout {
            operation: operation.into(),
            timeout,
        }
    }

    /// Classify an alloy contract error.
    ///
    /// Only an execution revert reported by the node (code 3, or a message
    /// mentioning a revert) and ABI decoding failures such as empty return
    /// data are reverts. Any other error response, e.g. a 429 rate limit, and
    /// everything coming out of the transport itself is a connection failure.
    pub fn from_contract_error(
        operation: impl Into<String>,
        address: Address,
        error: alloy_contract::Error,
    ) -> Self {
        match error {
            alloy_contract::Error::TransportError(e) => {
                let reverted = e.as_error_resp().is_some_and(is_execution_revert);
                if reverted {
                    Self::call_reverted(operation, address, e)
                } else {
                    Self::chain_connection_failed(operation, e)
                }
            }
            other => Self::call_reverted(operation, address, other),
        }
    }

    /// Whether the contract answered with a revert or undecodable data.
    pub fn is_call_reverted(&self) -> bool {
        matches!(self, RpcError::CallReverted { .. })
    }
}

fn is_execution_revert<E>(payload: &ErrorPayload<E>) -> bool {
    payload.code == EXECUTION_REVERTED_CODE
        || payload.message.to_ascii_lowercase().contains("revert")
}
