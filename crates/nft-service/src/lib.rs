// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Application service layer for NFT lookups
//!
//! This crate sits between the HTTP handlers and the upstream client. It is a
//! pure delegation layer: each operation forwards to an [`nft_client::NftApi`]
//! implementation and wraps any failure with exactly one operation-specific
//! context prefix, preserving the client error as the cause.
//!
//! # Architecture
//!
//! - [`service`]: the [`NftService`] trait and its [`Service`] implementation
//! - [`error`]: [`ServiceError`] with the per-operation context wrapping

pub mod error;
pub mod service;

pub use error::{ServiceError, ServiceResult};
pub use service::{NftService, Service};
