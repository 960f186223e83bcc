// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for loading configuration from the environment.

/// Errors that can occur while reading configuration values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("Missing environment variable {name}")]
    Missing {
        /// Variable name
        name: String,
    },

    /// A variable is set but cannot be parsed.
    #[error("Invalid value for {name}: {details}")]
    Invalid {
        /// Variable name
        name: String,
        /// What went wrong
        details: String,
    },
}

impl ConfigError {
    /// Create a `Missing` error.
    pub fn missing(name: impl Into<String>) -> Self {
        ConfigError::Missing { name: name.into() }
    }

    /// Create an `Invalid` error.
    pub fn invalid(name: impl Into<String>, details: impl Into<String>) -> Self {
        ConfigError::Invalid {
            name: name.into(),
            details: details.into(),
        }
    }
}
