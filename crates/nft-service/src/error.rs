// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for service-layer operations
//!
//! Each variant adds exactly one contextual prefix to the underlying client
//! error. The client error remains reachable through `source()`, so callers
//! that log error chains see the full cause while the rendered message stays
//! a single flat string.

use nft_client::ClientError;
use thiserror::Error;

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors returned by the application service
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Ownership lookup failed
    #[error("failed to get NFT ownership: {source}")]
    Ownership {
        /// The client failure being wrapped
        #[source]
        source: ClientError,
    },

    /// Traits rarity lookup failed
    #[error("failed to get NFT traits rarity: {source}")]
    TraitsRarity {
        /// The client failure being wrapped
        #[source]
        source: ClientError,
    },
}
