// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! The `NftService` trait and its delegating implementation
//!
//! Handlers depend on the [`NftService`] trait, never on a concrete client,
//! which keeps the HTTP layer testable with substitutable stand-ins.

use nft_client::{NftApi, Ownership, TraitProperty, TraitsRarity};
use tracing::debug;

use crate::error::{ServiceError, ServiceResult};

/// Abstract service capability the HTTP handlers depend on
pub trait NftService: Send + Sync {
    /// Look up the ownership record for an NFT
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Ownership` wrapping the client failure.
    fn get_ownership(&self, id: &str)
    -> impl Future<Output = ServiceResult<Ownership>> + Send;

    /// Look up rarity scores for traits within a collection
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::TraitsRarity` wrapping the client failure.
    fn get_traits_rarity(
        &self,
        collection_id: &str,
        properties: &[TraitProperty],
    ) -> impl Future<Output = ServiceResult<TraitsRarity>> + Send;
}

/// Delegating service implementation over any upstream client
///
/// Performs no input validation and no payload transformation; its only job
/// is delegation plus one layer of error context.
#[derive(Debug, Clone)]
pub struct Service<C> {
    client: C,
}

impl<C> Service<C> {
    /// Create a new service backed by the given client
    pub fn new(client: C) -> Self {
        Self { client }
    }
}

impl<C: NftApi> NftService for Service<C> {
    async fn get_ownership(&self, id: &str) -> ServiceResult<Ownership> {
        debug!(id, "looking up NFT ownership");

        self.client
            .get_ownership(id)
            .await
            .map_err(|source| ServiceError::Ownership { source })
    }

    async fn get_traits_rarity(
        &self,
        collection_id: &str,
        properties: &[TraitProperty],
    ) -> ServiceResult<TraitsRarity> {
        debug!(
            collection_id,
            property_count = properties.len(),
            "looking up NFT traits rarity"
        );

        self.client
            .get_traits_rarity(collection_id, properties)
            .await
            .map_err(|source| ServiceError::TraitsRarity { source })
    }
}
