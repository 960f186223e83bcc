// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tower middleware for the RPC client behind [`AlloyChainReader`](crate::AlloyChainReader).
//!
//! Drop pages issue a handful of `eth_call`s per resolution, so the stack is
//! short: an optional [`LoggingLayer`] outside a [`RetryLayer`].
//!
//! ```rust,ignore
//! use alloy_rpc_client::ClientBuilder;
//! use dropscan::transport::{LoggingLayer, RetryLayer};
//!
//! let client = ClientBuilder::default()
//!     .layer(LoggingLayer::new())
//!     .layer(RetryLayer::with_max_retries(3))
//!     .http(rpc_url);
//! ```

mod logging;
mod retry;

pub use logging::{LoggingLayer, LoggingService};
pub use retry::{RetryConfig, RetryLayer, RetryLayerBuilder, RetryService};
