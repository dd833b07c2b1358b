// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Generic NFT marketplace client trait and domain types
//!
//! This crate provides the common abstraction for upstream NFT marketplace
//! clients, keeping the service and handler layers independent of any
//! concrete provider.
//!
//! # Core Abstractions
//!
//! - **`NftApi` Trait**: Common interface for upstream NFT data providers
//! - **Error Handling**: `ClientError` taxonomy separating transport,
//!   upstream, and decode failures
//! - **Data Types**: Value objects for ownership records and trait rarity

use thiserror::Error;

pub mod types;

pub use types::*;

/// Generic trait for upstream NFT marketplace clients
///
/// Implementations issue the outbound HTTP calls; callers treat identifiers
/// as opaque strings and receive decoded value objects or a [`ClientError`].
pub trait NftApi: Send + Sync {
    /// Fetch the ownership record for an NFT
    ///
    /// The `id` is the upstream's composite identifier and is passed through
    /// without validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the upstream rejects it, or the
    /// response body cannot be decoded.
    fn get_ownership(&self, id: &str)
    -> impl Future<Output = Result<Ownership, ClientError>> + Send;

    /// Fetch rarity scores for a set of traits within a collection
    ///
    /// # Errors
    ///
    /// Same failure modes as [`NftApi::get_ownership`].
    fn get_traits_rarity(
        &self,
        collection_id: &str,
        properties: &[TraitProperty],
    ) -> impl Future<Output = Result<TraitsRarity, ClientError>> + Send;
}

/// Errors that can occur when talking to an upstream NFT provider
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or connection failure reaching the upstream
    #[error("failed to execute request: {message}")]
    Transport {
        /// Description of the underlying transport failure
        message: String,
    },

    /// Upstream returned a non-success status; carries the upstream's own
    /// error message verbatim, not the HTTP status code
    #[error("{message}")]
    Upstream {
        /// Message extracted from the upstream's JSON error body
        message: String,
    },

    /// Response body was not valid JSON or did not match the expected shape
    #[error("failed to decode response: {message}")]
    Decode {
        /// Description of the decode failure
        message: String,
    },

    /// Request exceeded the configured timeout
    #[error("request timed out after {timeout_seconds} seconds")]
    Timeout {
        /// Configured timeout in seconds
        timeout_seconds: u64,
    },

    /// Client was constructed with invalid settings
    #[error("configuration error: {0}")]
    Config(String),
}
