// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Item display metadata

use serde::{Deserialize, Serialize};

/// Name, description and image of a drop or of one of its items
///
/// Deserializes from the usual NFT metadata JSON; unknown fields are ignored
/// and missing ones default to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemMetadata {
    /// Display name
    pub name: String,
    /// Long description
    pub description: String,
    /// Image URI
    pub image: String,
}

impl ItemMetadata {
    /// Metadata with only a name, used when no metadata document is available
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
