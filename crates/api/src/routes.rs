// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Routes module
//!
//! This module provides route configuration and handlers for the gateway.

pub mod handlers;

use axum::{
    Router,
    routing::{get, post},
};
use handlers::{health_handler, ownership_handler, traits_rarity_handler};
use nft_service::NftService;

use crate::state::ServerState;

/// Create application routes
pub fn create_routes<S>() -> Router<ServerState<S>>
where
    S: NftService + 'static,
{
    // Health endpoint sits outside the /nft surface for monitoring purposes
    let health_routes = Router::new().route("/health", get(health_handler::<S>));

    let nft_routes = Router::new()
        .route("/nft/ownership/{id}", get(ownership_handler::<S>))
        .route(
            "/nft/traits/rarity/{collectionID}",
            post(traits_rarity_handler::<S>),
        );

    Router::new().merge(health_routes).merge(nft_routes)
}
