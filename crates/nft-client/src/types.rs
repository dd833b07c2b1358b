// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Value objects for NFT ownership and trait rarity payloads
//!
//! All records are transient request/response payloads decoded from (or
//! encoded for) the upstream wire format; nothing here is persisted.

use serde::{Deserialize, Serialize};

/// Ownership record for a single NFT
///
/// Created by deserializing the upstream response and passed through to the
/// caller unchanged. Upstream identifiers use an opaque colon-delimited
/// composite format which this type does not interpret. Fields the upstream
/// omits fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ownership {
    /// Composite ownership identifier
    pub id: String,
    /// Blockchain the token lives on
    pub blockchain: String,
    /// Composite item identifier
    pub item_id: String,
    /// Contract address, blockchain-prefixed
    pub contract: String,
    /// Collection identifier
    pub collection: String,
    /// Token identifier within the contract
    pub token_id: String,
    /// Current owner address, blockchain-prefixed
    pub owner: String,
    /// Quantity owned
    pub value: String,
    /// Marketplace source of the record
    pub source: String,
    /// Creation timestamp as reported by the upstream
    pub created_at: String,
    /// Last update timestamp as reported by the upstream
    pub last_updated_at: String,
    /// Token creators with their royalty shares; `null` on the wire when the
    /// upstream omits them
    pub creators: Option<Vec<Creator>>,
    /// Lazily minted quantity
    pub lazy_value: String,
    /// Version counter of the ownership record
    pub version: i64,
}

/// A token creator with its integer share value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Creator {
    /// Creator account address, blockchain-prefixed
    pub account: String,
    /// Share value in basis points
    pub value: i64,
}

/// A key/value pair identifying a trait to query rarity for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraitProperty {
    /// Trait name
    pub key: String,
    /// Trait value
    pub value: String,
}

/// A trait key/value pair with its rarity score
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraitRarity {
    /// Trait name
    pub key: String,
    /// Trait value
    pub value: String,
    /// Rarity score, string-encoded in an upstream-defined format
    pub rarity: String,
}

/// Ordered sequence of trait rarity results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraitsRarity {
    /// Rarity results in upstream order
    pub traits: Vec<TraitRarity>,
}
