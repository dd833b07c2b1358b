// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Rarible REST API integration
//!
//! This crate provides the [`nft_client::NftApi`] implementation backed by
//! the Rarible multichain API (`https://api.rarible.org/v0.1`).
//!
//! # Features
//!
//! - **Ownership lookups**: `GET /ownerships/{id}` with static credential headers
//! - **Trait rarity lookups**: `POST /items/traits/rarity`
//! - **Verbatim error passthrough**: non-success responses surface the
//!   upstream's own error message, not the HTTP status code
//! - **Bounded requests**: a default request timeout guards every call
//! - **Testing Support**: exercised end to end with wiremock HTTP simulation

pub mod client;

pub use client::*;
