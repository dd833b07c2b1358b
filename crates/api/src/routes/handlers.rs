// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP request handlers module
//!
//! This module provides the HTTP request handlers for the gateway. Handlers
//! are thin: they pull route parameters and bodies off the request, invoke
//! the injected service, and serialize the result or the error. Path
//! parameters are opaque strings; the upstream's composite
//! `BLOCKCHAIN:contract:token:owner` syntax is never decoded or validated
//! at this layer.

use axum::{Json, extract::Path, extract::State};
use nft_client::{Ownership, TraitProperty, TraitsRarity};
use nft_service::NftService;
use tracing::error;

use crate::{
    error::ServerError,
    extractors::JsonBody,
    state::{HealthCheck, ServerState},
};

/// Health check endpoint handler
pub async fn health_handler<S>(State(state): State<ServerState<S>>) -> Json<HealthCheck>
where
    S: NftService,
{
    Json(state.health_check())
}

/// Ownership lookup
///
/// `GET /nft/ownership/{id}`: returns the upstream ownership record
/// unchanged. Any service failure becomes HTTP 500 with the wrapped message.
pub async fn ownership_handler<S>(
    State(state): State<ServerState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Ownership>, ServerError>
where
    S: NftService,
{
    let ownership = state.service().get_ownership(&id).await.map_err(|e| {
        error!(id, %e, "ownership lookup failed");
        e
    })?;

    Ok(Json(ownership))
}

/// Traits rarity lookup
///
/// `POST /nft/traits/rarity/{collectionID}`: the body must be a JSON array of
/// `{key, value}` pairs. A body that fails to parse is rejected with the
/// fixed 400 response before any upstream call is made; empty arrays and
/// empty IDs pass through untouched.
pub async fn traits_rarity_handler<S>(
    State(state): State<ServerState<S>>,
    Path(collection_id): Path<String>,
    JsonBody(properties): JsonBody<Vec<TraitProperty>>,
) -> Result<Json<TraitsRarity>, ServerError>
where
    S: NftService,
{
    let rarity = state
        .service()
        .get_traits_rarity(&collection_id, &properties)
        .await
        .map_err(|e| {
            error!(collection_id, %e, "traits rarity lookup failed");
            e
        })?;

    Ok(Json(rarity))
}
