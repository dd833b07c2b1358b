// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! NFT Gateway Server Implementation
//!
//! This crate provides the HTTP surface of the NFT gateway, built with Axum
//! and designed for production use with hierarchical configuration, request
//! tracing middleware, and bounded graceful shutdown.
//!
//! # Module Structure
//!
//! - [`config`]: Server and upstream configuration with hierarchical loading
//! - [`error`]: Error types and HTTP response mapping
//! - [`extractors`]: Request body extraction with the fixed 400 contract
//! - [`state`]: Shared application state, generic over the service capability
//! - [`server`]: Server lifecycle and coordinated shutdown
//! - [`routes`]: Route configuration and HTTP request handlers
//!
//! # Key Features
//!
//! - **Thin Proxy Semantics**: payloads pass through to and from the upstream
//!   without transformation; service errors surface as flat `{"error": ...}`
//!   bodies
//! - **Graceful Shutdown**: `CancellationToken`-driven drain with a bounded
//!   timer, forced termination when the timer expires
//! - **Dependency Injection**: the router is generic over the service trait,
//!   so tests can substitute stub services

pub mod config;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{Environment, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use server::{Server, ShutdownConfig};
pub use state::{HealthCheck, ServerState};
