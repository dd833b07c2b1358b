// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0
#![allow(missing_docs, dead_code)]

//! Test fixtures for gateway integration tests
//!
//! Provides a closure-backed stub service so handler behavior can be
//! exercised without an upstream.

use std::net::SocketAddr;

use api::{Server, ServerConfig, ShutdownConfig};
use nft_client::{Ownership, TraitProperty, TraitsRarity};
use nft_service::{NftService, ServiceError, ServiceResult};

type OwnershipFn = dyn Fn(&str) -> ServiceResult<Ownership> + Send + Sync;
type TraitsRarityFn = dyn Fn(&str, &[TraitProperty]) -> ServiceResult<TraitsRarity> + Send + Sync;

/// Stub service with per-operation closures
pub struct StubService {
    pub ownership: Box<OwnershipFn>,
    pub traits_rarity: Box<TraitsRarityFn>,
}

impl Default for StubService {
    fn default() -> Self {
        Self {
            ownership: Box::new(|_| Ok(Ownership::default())),
            traits_rarity: Box::new(|_, _| Ok(TraitsRarity::default())),
        }
    }
}

impl NftService for StubService {
    async fn get_ownership(&self, id: &str) -> ServiceResult<Ownership> {
        (self.ownership)(id)
    }

    async fn get_traits_rarity(
        &self,
        collection_id: &str,
        properties: &[TraitProperty],
    ) -> ServiceResult<TraitsRarity> {
        (self.traits_rarity)(collection_id, properties)
    }
}

/// A service error whose rendered message matches what the real delegation
/// layer produces for an upstream failure
pub fn ownership_failure(message: &str) -> ServiceError {
    ServiceError::Ownership {
        source: nft_client::ClientError::Upstream {
            message: message.to_string(),
        },
    }
}

pub fn traits_rarity_failure(message: &str) -> ServiceError {
    ServiceError::TraitsRarity {
        source: nft_client::ClientError::Upstream {
            message: message.to_string(),
        },
    }
}

/// Start a test server around the given stub and return its address
pub async fn spawn_server(stub: StubService) -> SocketAddr {
    let config = ServerConfig::for_testing();
    let (addr, _token) = Server::with_service(config, ShutdownConfig::default(), stub)
        .expect("Failed to create server")
        .run_for_testing()
        .await
        .expect("Failed to start test server");
    addr
}
