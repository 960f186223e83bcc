// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP providers for reading drop contracts
//!
//! [`create_http_provider`] builds a fill-less [`RootProvider`](alloy_provider::RootProvider)
//! whose client runs every request through the [`transport`](crate::transport)
//! layers. Drop pages only read, so no transaction fillers are installed.
//!
//! ```rust,ignore
//! use dropscan::provider::{create_http_provider, ProviderConfig};
//!
//! let provider = create_http_provider(
//!     ProviderConfig::new("https://api.avax.network/ext/bc/C/rpc").with_max_retries(5),
//! )?;
//! ```

mod config;
mod factory;

pub use config::ProviderConfig;
pub use factory::{create_http_provider, DropProvider};
