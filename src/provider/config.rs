// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Provider configuration options

/// Configuration for creating providers
///
/// # Example
///
/// ```rust
/// use dropscan::provider::ProviderConfig;
///
/// let config = ProviderConfig::new("https://api.avax.network/ext/bc/C/rpc")
///     .with_max_retries(5)
///     .with_logging(true);
/// assert!(config.logging_enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// RPC endpoint URL
    pub url: String,
    /// Retries of transient failures; zero disables retrying
    pub max_retries: u32,
    /// Wrap requests in `rpc_call` spans
    pub logging_enabled: bool,
}

impl ProviderConfig {
    /// Create a new provider configuration with the specified URL
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_retries: 3,
            logging_enabled: false,
        }
    }

    /// Set the number of retries for transient failures
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Enable or disable request logging
    #[must_use]
    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.logging_enabled = enabled;
        self
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new("http://localhost:8545")
    }
}
